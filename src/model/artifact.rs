//! JSON model artifact: declared input schema plus classifier parameters.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ArtifactError, PredictionError};
use super::schema::{FeatureRow, FeatureSchema};
use super::{ChurnLabel, GbdtStumpModel, LinearMarginModel, LogRegModel, Predictor};

/// Classifier family stored in the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    Logreg(LogRegModel),
    GbdtStump(GbdtStumpModel),
    LinearMargin(LinearMarginModel),
}

impl Classifier {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Classifier::Logreg(_) => "logreg",
            Classifier::GbdtStump(_) => "gbdt_stump",
            Classifier::LinearMargin(_) => "linear_margin",
        }
    }

    fn validate(&self, input_len: usize) -> Result<(), String> {
        match self {
            Classifier::Logreg(model) => model.validate(input_len),
            Classifier::GbdtStump(model) => model.validate(input_len),
            Classifier::LinearMargin(model) => model.validate(input_len),
        }
    }

    fn probabilities(&self, features: &[f32]) -> Result<[f32; 2], PredictionError> {
        let proba = match self {
            Classifier::Logreg(model) => model.predict_proba(features),
            Classifier::GbdtStump(model) => model.predict_proba(features),
            Classifier::LinearMargin(_) => {
                return Err(PredictionError::ProbabilityUnsupported {
                    classifier: self.kind_name().to_string(),
                });
            }
        };
        <[f32; 2]>::try_from(proba.as_slice())
            .map_err(|_| PredictionError::OutputShape { found: proba.len() })
    }

    fn class_index(&self, features: &[f32]) -> Result<usize, PredictionError> {
        match self {
            Classifier::LinearMargin(model) => Ok(model.predict_class_index(features)),
            _ => {
                let [loyal, churn] = self.probabilities(features)?;
                Ok(usize::from(churn > loyal))
            }
        }
    }
}

/// Trained churn model as shipped next to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub model_id: String,
    pub model_version: i64,
    /// Input columns in training order.
    pub columns: FeatureSchema,
    pub classifier: Classifier,
}

impl ModelArtifact {
    /// Read, parse and validate an artifact file.
    pub fn load_json(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ArtifactError::Missing {
                path: path.to_path_buf(),
            },
            _ => ArtifactError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let artifact: Self =
            serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        artifact.validate(path)?;
        Ok(artifact)
    }

    /// Check the schema against the form layout, then the classifier against the schema.
    pub fn validate(&self, path: &Path) -> Result<(), ArtifactError> {
        self.columns
            .check_profile_layout()
            .map_err(|source| ArtifactError::Schema {
                path: path.to_path_buf(),
                source,
            })?;
        self.classifier
            .validate(self.columns.encoded_len())
            .map_err(|reason| ArtifactError::Invalid {
                path: path.to_path_buf(),
                reason,
            })
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, row: &FeatureRow) -> Result<ChurnLabel, PredictionError> {
        let features = self.columns.encode(row)?;
        ChurnLabel::from_index(self.classifier.class_index(&features)?)
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<[f32; 2], PredictionError> {
        let features = self.columns.encode(row)?;
        self.classifier.probabilities(&features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Stump;
    use crate::profile::CustomerProfile;
    use tempfile::tempdir;

    fn logreg_artifact(churn_bias: f32) -> ModelArtifact {
        let columns = FeatureSchema::profile_layout();
        let width = columns.encoded_len();
        ModelArtifact {
            model_id: "test".into(),
            model_version: 1,
            columns,
            classifier: Classifier::Logreg(LogRegModel {
                classes: vec!["0".into(), "1".into()],
                input_len: width,
                weights: vec![0.0; width * 2],
                bias: vec![0.0, churn_bias],
                temperature: 1.0,
            }),
        }
    }

    #[test]
    fn logreg_artifact_predicts_from_bias() {
        let row = CustomerProfile::default().to_row();
        let churny = logreg_artifact(2.0);
        assert_eq!(churny.predict(&row), Ok(ChurnLabel::Churn));
        let [loyal, churn] = churny.predict_proba(&row).unwrap();
        assert!((loyal + churn - 1.0).abs() < 1e-6);
        assert!(churn > 0.8);

        let loyal_model = logreg_artifact(-2.0);
        assert_eq!(loyal_model.predict(&row), Ok(ChurnLabel::Loyal));
    }

    #[test]
    fn margin_classifier_has_no_probabilities() {
        let columns = FeatureSchema::profile_layout();
        let width = columns.encoded_len();
        let artifact = ModelArtifact {
            model_id: "svm".into(),
            model_version: 1,
            columns,
            classifier: Classifier::LinearMargin(LinearMarginModel {
                classes: vec!["0".into(), "1".into()],
                input_len: width,
                weights: vec![0.0; width],
                bias: 1.0,
            }),
        };
        let row = CustomerProfile::default().to_row();
        assert_eq!(artifact.predict(&row), Ok(ChurnLabel::Churn));
        let err = artifact.predict_proba(&row).unwrap_err();
        assert!(err.is_probability_unsupported());
    }

    #[test]
    fn missing_file_maps_to_missing_error() {
        let dir = tempdir().unwrap();
        let err = ModelArtifact::load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { .. }));
    }

    #[test]
    fn json_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, serde_json::to_vec(&logreg_artifact(1.0)).unwrap()).unwrap();
        let loaded = ModelArtifact::load_json(&path).unwrap();
        assert_eq!(loaded.classifier.kind_name(), "logreg");
        assert_eq!(loaded.columns.columns().len(), 19);
    }

    #[test]
    fn gbdt_stump_artifact_loads_and_predicts() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let columns = FeatureSchema::profile_layout();
        let width = columns.encoded_len();
        // Input 0 is the one-hot `Male` slot, set for the default profile.
        let split = |left_value, right_value| Stump {
            feature_index: 0,
            threshold: 0.5,
            left_value,
            right_value,
        };
        let artifact = ModelArtifact {
            model_id: "stumps".into(),
            model_version: 2,
            columns,
            classifier: Classifier::GbdtStump(GbdtStumpModel {
                classes: vec!["0".into(), "1".into()],
                input_len: width,
                learning_rate: 1.0,
                init_raw: vec![0.0, 0.0],
                stumps: vec![vec![split(0.0, 0.0), split(-1.0, 2.0)]],
            }),
        };
        std::fs::write(&path, serde_json::to_vec(&artifact).unwrap()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains(r#""kind":"gbdt_stump""#));

        let loaded = ModelArtifact::load_json(&path).unwrap();
        assert_eq!(loaded.classifier.kind_name(), "gbdt_stump");
        let row = CustomerProfile::default().to_row();
        assert_eq!(loaded.predict(&row), Ok(ChurnLabel::Churn));
        let [loyal, churn] = loaded.predict_proba(&row).unwrap();
        assert!((churn - 0.880_797).abs() < 1e-4, "{churn}");
        assert!((loyal + churn - 1.0).abs() < 1e-6);
    }

    #[test]
    fn width_mismatch_is_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        let mut artifact = logreg_artifact(1.0);
        if let Classifier::Logreg(model) = &mut artifact.classifier {
            model.input_len = 10;
        }
        std::fs::write(&path, serde_json::to_vec(&artifact).unwrap()).unwrap();
        let err = ModelArtifact::load_json(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid { .. }));
    }

    #[test]
    fn garbage_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, b"not json").unwrap();
        assert!(matches!(
            ModelArtifact::load_json(&path),
            Err(ArtifactError::Parse { .. })
        ));
    }
}
