//! Softmax logistic regression over the encoded feature vector.

use serde::{Deserialize, Serialize};

use super::softmax;

/// Logistic regression parameters, one weight row per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRegModel {
    pub classes: Vec<String>,
    pub input_len: usize,
    /// Shape: `[n_classes][input_len]`, row-major.
    pub weights: Vec<f32>,
    pub bias: Vec<f32>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    1.0
}

impl LogRegModel {
    /// Validate dimensions against the schema's encoded width.
    pub fn validate(&self, input_len: usize) -> Result<(), String> {
        if self.input_len != input_len {
            return Err(format!(
                "input_len {} does not match encoded schema width {}",
                self.input_len, input_len
            ));
        }
        let classes = self.classes.len();
        if classes != 2 {
            return Err(format!("expected 2 classes, found {classes}"));
        }
        if self.weights.len() != classes * self.input_len {
            return Err("weights length mismatch".to_string());
        }
        if self.bias.len() != classes {
            return Err("bias length mismatch".to_string());
        }
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err("temperature must be > 0".to_string());
        }
        if self.weights.iter().chain(&self.bias).any(|v| !v.is_finite()) {
            return Err("weights must be finite".to_string());
        }
        Ok(())
    }

    /// Raw logits for one encoded row, scaled by temperature.
    pub fn logits(&self, features: &[f32]) -> Vec<f32> {
        if features.len() != self.input_len {
            return Vec::new();
        }
        let temp = self.temperature.max(1e-6);
        self.bias
            .iter()
            .zip(self.weights.chunks_exact(self.input_len))
            .map(|(bias, row)| {
                let dot: f32 = row.iter().zip(features).map(|(w, x)| w * x).sum();
                (bias + dot) / temp
            })
            .collect()
    }

    /// Class probabilities for one encoded row.
    pub fn predict_proba(&self, features: &[f32]) -> Vec<f32> {
        softmax(&self.logits(features))
    }
}
