//! Gradient-boosted decision stumps exported from the training notebook.

use serde::{Deserialize, Serialize};

use super::softmax;

/// Single-split tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Index into the encoded feature vector.
    pub feature_index: u16,
    pub threshold: f32,
    /// Output for `feature <= threshold`.
    pub left_value: f32,
    /// Output for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    pub fn predict(&self, features: &[f32]) -> f32 {
        let value = features
            .get(self.feature_index as usize)
            .copied()
            .unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Boosted stump ensemble with one stump per class per round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtStumpModel {
    pub classes: Vec<String>,
    pub input_len: usize,
    pub learning_rate: f32,
    /// Starting raw score per class.
    pub init_raw: Vec<f32>,
    /// Shape: `[n_rounds][n_classes]`.
    pub stumps: Vec<Vec<Stump>>,
}

impl GbdtStumpModel {
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
        if self.init_raw.len() != self.classes.len() {
            return Err("init_raw length must match classes length".to_string());
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        for (round_idx, round) in self.stumps.iter().enumerate() {
            if round.len() != self.classes.len() {
                return Err(format!(
                    "Round {round_idx} has {} stumps but expected {}",
                    round.len(),
                    self.classes.len()
                ));
            }
            if let Some(stump) = round
                .iter()
                .find(|stump| stump.feature_index as usize >= self.input_len)
            {
                return Err(format!(
                    "Round {round_idx} splits on feature {} outside input_len {}",
                    stump.feature_index, self.input_len
                ));
            }
        }
        Ok(())
    }

    pub fn predict_raw(&self, features: &[f32]) -> Vec<f32> {
        let mut raw = self.init_raw.clone();
        for round in &self.stumps {
            for (score, stump) in raw.iter_mut().zip(round) {
                *score += self.learning_rate * stump.predict(features);
            }
        }
        raw
    }

    pub fn predict_proba(&self, features: &[f32]) -> Vec<f32> {
        softmax(&self.predict_raw(features))
    }
}
