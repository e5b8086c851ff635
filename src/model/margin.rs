//! Hard-margin linear classifier (e.g. an uncalibrated linear SVM).
//!
//! Produces a decision but no probabilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearMarginModel {
    pub classes: Vec<String>,
    pub input_len: usize,
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl LinearMarginModel {
    pub fn validate(&self, input_len: usize) -> Result<(), String> {
        if self.input_len != input_len {
            return Err(format!(
                "input_len {} does not match encoded schema width {}",
                self.input_len, input_len
            ));
        }
        if self.classes.len() != 2 {
            return Err(format!("expected 2 classes, found {}", self.classes.len()));
        }
        if self.weights.len() != self.input_len {
            return Err("weights length mismatch".to_string());
        }
        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err("weights must be finite".to_string());
        }
        Ok(())
    }

    /// Signed distance to the separating hyperplane.
    pub fn decision(&self, features: &[f32]) -> f32 {
        self.bias
            + self
                .weights
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f32>()
    }

    /// Index 1 on the positive side of the margin, 0 otherwise.
    pub fn predict_class_index(&self, features: &[f32]) -> usize {
        usize::from(self.decision(features) > 0.0)
    }
}
