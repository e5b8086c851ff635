use std::path::PathBuf;

use thiserror::Error;

use super::schema::SchemaError;

/// Failure of a single `predict` / `predict_proba` call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PredictionError {
    /// The classifier has no calibrated probability output.
    #[error("Classifier {classifier} does not provide probability estimates")]
    ProbabilityUnsupported { classifier: String },
    /// The row has a different number of columns than the schema.
    #[error("Feature row has {found} columns but the model expects {expected}")]
    RowLength { expected: usize, found: usize },
    /// A column appears under the wrong name or in the wrong position.
    #[error("Column {index} is `{found}` but the model expects `{expected}`")]
    ColumnName {
        index: usize,
        expected: String,
        found: String,
    },
    /// A categorical column received a number or vice versa.
    #[error("Column `{column}` expects a {expected} value")]
    ValueKind {
        column: String,
        expected: &'static str,
    },
    /// A categorical value the model was never trained on.
    #[error("Column `{column}` has unknown category `{value}`")]
    UnknownCategory { column: String, value: String },
    /// NaN or infinite numeric input.
    #[error("Column `{column}` is not a finite number")]
    NonFinite { column: String },
    /// The classifier produced something other than a two-class distribution.
    #[error("Classifier returned {found} outputs but two classes were expected")]
    OutputShape { found: usize },
    /// A probability that is NaN or infinite.
    #[error("Classifier returned a non-finite probability")]
    InvalidProbability,
}

impl PredictionError {
    /// Whether this is the recoverable "no probabilities" case.
    pub fn is_probability_unsupported(&self) -> bool {
        matches!(self, PredictionError::ProbabilityUnsupported { .. })
    }
}

/// Failure to load the predictor artifact at startup.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No file at the configured path.
    #[error("Model file {path} not found")]
    Missing { path: PathBuf },
    /// The file exists but could not be read.
    #[error("Failed to read model file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not a valid artifact document.
    #[error("Invalid model file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The classifier parameters are inconsistent.
    #[error("Model file {path} is malformed: {reason}")]
    Invalid { path: PathBuf, reason: String },
    /// The feature schema does not match the profile collected by the form.
    #[error("Model file {path} was trained on a different input layout: {source}")]
    Schema { path: PathBuf, source: SchemaError },
}
