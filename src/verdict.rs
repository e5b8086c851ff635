//! Turn predictor output into what the result panel shows.
//!
//! [`evaluate`] runs both inference calls for one profile; [`render`] maps the outcome to one
//! of two fixed message/recommendation sets.

use crate::model::{ChurnLabel, PredictionError, Predictor};
use crate::profile::CustomerProfile;

/// Placeholder used when no confidence is available and none is configured.
pub const DEFAULT_CONFIDENCE_PLACEHOLDER: &str = "N/A";

/// Confidence of the predicted label, as a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// `max(p) * 100`, always within `[0, 100]`.
    Estimated(f32),
    /// The classifier has no probability output.
    Unavailable,
}

impl Confidence {
    /// Build from a two-class distribution.
    pub fn from_distribution(proba: [f32; 2]) -> Result<Self, PredictionError> {
        if proba.iter().any(|p| !p.is_finite()) {
            return Err(PredictionError::InvalidProbability);
        }
        let best = proba[0].max(proba[1]);
        Ok(Confidence::Estimated((best * 100.0).clamp(0.0, 100.0)))
    }

    pub fn percent(self) -> Option<f32> {
        match self {
            Confidence::Estimated(value) => Some(value),
            Confidence::Unavailable => None,
        }
    }

    /// `"90.00%"`, or `placeholder` when unavailable.
    pub fn display(self, placeholder: &str) -> String {
        match self {
            Confidence::Estimated(value) => format!("{value:.2}%"),
            Confidence::Unavailable => placeholder.to_string(),
        }
    }
}

/// Outcome of one analysis. Never stored past the next render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    pub label: ChurnLabel,
    pub confidence: Confidence,
}

/// Run the predictor on `profile`.
///
/// Only [`PredictionError::ProbabilityUnsupported`] is absorbed (as
/// [`Confidence::Unavailable`]); every other failure is returned to the caller.
pub fn evaluate(
    profile: &CustomerProfile,
    predictor: &dyn Predictor,
) -> Result<PredictionResult, PredictionError> {
    let row = profile.to_row();
    let label = predictor.predict(&row)?;
    let confidence = match predictor.predict_proba(&row) {
        Ok(proba) => Confidence::from_distribution(proba)?,
        Err(err) if err.is_probability_unsupported() => {
            tracing::debug!("{err}; rendering without confidence");
            Confidence::Unavailable
        }
        Err(err) => return Err(err),
    };
    Ok(PredictionResult { label, confidence })
}

/// Display tone of the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Warning,
    Success,
}

/// Text for the result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictView {
    pub tone: VerdictTone,
    pub headline: &'static str,
    pub detail: String,
    pub recommendations: [&'static str; 2],
}

const CHURN_HEADLINE: &str = "⚠ Hasil: Berisiko Tinggi (Churn)";
const LOYAL_HEADLINE: &str = "✔ Hasil: Loyal (Non-Churn)";

const RETENTION_ACTIONS: [&str; 2] = [
    "Tawarkan diskon perpanjangan kontrak.",
    "Hubungi pelanggan untuk menanyakan kendala teknis.",
];
const LOYALTY_ACTIONS: [&str; 2] = [
    "Pertahankan kualitas layanan saat ini.",
    "Tawarkan program loyalitas atau upgrade paket.",
];

/// Map a result to its message and recommendations.
pub fn render(result: &PredictionResult, placeholder: &str) -> VerdictView {
    let confidence = result.confidence.display(placeholder);
    match result.label {
        ChurnLabel::Churn => VerdictView {
            tone: VerdictTone::Warning,
            headline: CHURN_HEADLINE,
            detail: format!(
                "Sistem mendeteksi probabilitas sebesar {confidence} bahwa pelanggan ini akan berhenti."
            ),
            recommendations: RETENTION_ACTIONS,
        },
        ChurnLabel::Loyal => VerdictView {
            tone: VerdictTone::Success,
            headline: LOYAL_HEADLINE,
            detail: format!("Tingkat keyakinan model: {confidence}."),
            recommendations: LOYALTY_ACTIONS,
        },
    }
}
