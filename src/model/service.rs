use std::path::Path;

use super::{ArtifactError, ModelArtifact, Predictor};

/// Process-wide predictor, loaded once at startup and only ever borrowed afterwards.
pub struct PredictionService {
    predictor: Box<dyn Predictor>,
    description: String,
}

impl PredictionService {
    /// Load the artifact at `path`. Any failure here blocks the dashboard.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        match ModelArtifact::load_json(path) {
            Ok(artifact) => {
                let description = format!(
                    "{} v{} ({})",
                    artifact.model_id,
                    artifact.model_version,
                    artifact.classifier.kind_name()
                );
                tracing::info!(
                    path = %path.display(),
                    classifier = artifact.classifier.kind_name(),
                    columns = artifact.columns.columns().len(),
                    "Loaded churn model"
                );
                Ok(Self::new(artifact, description))
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "Failed to load churn model: {err}");
                Err(err)
            }
        }
    }

    /// Wrap an already-built predictor.
    pub fn new(predictor: impl Predictor + 'static, description: impl Into<String>) -> Self {
        Self {
            predictor: Box::new(predictor),
            description: description.into(),
        }
    }

    pub fn predictor(&self) -> &dyn Predictor {
        self.predictor.as_ref()
    }

    /// Short human-readable model identity for the header.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
