//! Churn predictor: artifact loading, input schema and inference.
//!
//! The rest of the app only sees the [`Predictor`] trait. [`PredictionService`] owns the
//! one predictor loaded at startup and lends it to each analysis.

mod artifact;
mod error;
mod gbdt_stump;
mod logreg;
mod margin;
mod schema;
mod service;

pub use artifact::{Classifier, ModelArtifact};
pub use error::{ArtifactError, PredictionError};
pub use gbdt_stump::{GbdtStumpModel, Stump};
pub use logreg::LogRegModel;
pub use margin::LinearMarginModel;
pub use schema::{ColumnEncoding, ColumnSpec, FeatureRow, FeatureSchema, FeatureValue, SchemaError};
pub use service::PredictionService;

/// Conventional artifact file name, looked up in the working directory.
pub const DEFAULT_MODEL_FILE: &str = "model_churn_terbaik.json";

/// Binary outcome of the classifier. Class index 1 is churn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChurnLabel {
    Loyal,
    Churn,
}

impl ChurnLabel {
    /// Map a class index to a label; anything but 0 or 1 is a shape error.
    pub fn from_index(index: usize) -> Result<Self, PredictionError> {
        match index {
            0 => Ok(ChurnLabel::Loyal),
            1 => Ok(ChurnLabel::Churn),
            other => Err(PredictionError::OutputShape { found: other + 1 }),
        }
    }

    pub fn index(self) -> usize {
        match self {
            ChurnLabel::Loyal => 0,
            ChurnLabel::Churn => 1,
        }
    }
}

/// The two inference operations the dashboard consumes.
pub trait Predictor {
    /// Predicted class for one row.
    fn predict(&self, row: &FeatureRow) -> Result<ChurnLabel, PredictionError>;

    /// `[p(loyal), p(churn)]` for one row.
    ///
    /// Classifiers without calibrated output return
    /// [`PredictionError::ProbabilityUnsupported`].
    fn predict_proba(&self, row: &FeatureRow) -> Result<[f32; 2], PredictionError>;
}

/// Numerically-stable softmax.
pub fn softmax(raw: &[f32]) -> Vec<f32> {
    if raw.is_empty() {
        return Vec::new();
    }
    let max = raw.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = raw.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![1.0 / raw.len() as f32; raw.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one_and_keeps_order() {
        let out = softmax(&[1.0, 3.0]);
        assert!((out.iter().sum::<f32>() - 1.0).abs() < 1e-6);
        assert!(out[1] > out[0]);
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn softmax_handles_large_logits() {
        let out = softmax(&[1000.0, 1000.0]);
        assert!((out[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn label_index_round_trip_rejects_third_class() {
        assert_eq!(ChurnLabel::from_index(1), Ok(ChurnLabel::Churn));
        assert_eq!(ChurnLabel::Loyal.index(), 0);
        assert_eq!(
            ChurnLabel::from_index(2),
            Err(PredictionError::OutputShape { found: 3 })
        );
    }
}
