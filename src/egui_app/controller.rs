use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::AppSettings;
use crate::egui_app::state::{AnalysisState, ProfileForm, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::model::{ArtifactError, PredictionService};
use crate::profile::{CustomerProfile, ProfileSummary, collect};
use crate::verdict::{self, VerdictTone};

/// Startup failure that replaces the dashboard with an error screen.
#[derive(Debug, Error)]
#[error("{}", startup_headline(.model_path, .source))]
pub struct StartupError {
    pub model_path: PathBuf,
    #[source]
    pub source: ArtifactError,
}

/// Headline for the error screen; only a missing file asks the user to provide it.
fn startup_headline(model_path: &Path, source: &ArtifactError) -> String {
    let path = model_path.display();
    match source {
        ArtifactError::Missing { .. } => {
            format!("Sistem gagal memuat model. Pastikan file '{path}' tersedia.")
        }
        ArtifactError::Read { .. } => format!("Sistem gagal membaca file model '{path}'."),
        ArtifactError::Parse { .. } | ArtifactError::Invalid { .. } => {
            format!("File model '{path}' rusak atau tidak valid.")
        }
        ArtifactError::Schema { .. } => {
            format!("File model '{path}' tidak cocok dengan kolom formulir.")
        }
    }
}

/// Maintains dashboard state and bridges the predictor to the egui UI.
pub struct ChurnController {
    pub ui: UiState,
    service: PredictionService,
    settings: AppSettings,
}

impl ChurnController {
    pub fn new(service: PredictionService, settings: AppSettings) -> Self {
        let ui = UiState {
            expand_groups: settings.form.expand_groups,
            ..UiState::default()
        };
        Self {
            ui,
            service,
            settings,
        }
    }

    /// Load the predictor named by `settings` and build the controller around it.
    pub fn boot(settings: AppSettings) -> Result<Self, StartupError> {
        let model_path = settings.resolved_model_path();
        match PredictionService::load(&model_path) {
            Ok(service) => Ok(Self::new(service, settings)),
            Err(source) => Err(StartupError { model_path, source }),
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn model_description(&self) -> &str {
        self.service.description()
    }

    /// Profile described by the current form values.
    pub fn profile(&self) -> CustomerProfile {
        collect(&self.ui.form)
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary::from(&self.profile())
    }

    /// Restore every field to its default value. The last result stays visible.
    pub fn reset_form(&mut self) {
        self.ui.form = ProfileForm::default();
        self.set_status("Formulir dikembalikan ke nilai awal", StatusTone::Idle);
    }

    /// Classify the current profile and publish the verdict.
    ///
    /// A failed prediction only affects this run: the result panel shows the error and the
    /// dashboard stays usable.
    pub fn run_analysis(&mut self) {
        let profile = self.profile();
        match verdict::evaluate(&profile, self.service.predictor()) {
            Ok(result) => {
                tracing::info!(
                    label = ?result.label,
                    confidence = ?result.confidence.percent(),
                    tenure = profile.tenure_months,
                    contract = %profile.contract_type,
                    "Analysis complete"
                );
                let view = verdict::render(&result, &self.settings.confidence_placeholder);
                let tone = match view.tone {
                    VerdictTone::Warning => StatusTone::Warning,
                    VerdictTone::Success => StatusTone::Info,
                };
                self.set_status(view.headline, tone);
                self.ui.analysis = AnalysisState::ShowingResult(view);
            }
            Err(err) => {
                tracing::error!("Analysis failed: {err}");
                self.ui.analysis = AnalysisState::Failed(format!("Analisis gagal: {err}"));
                self.set_status("Analisis gagal; lihat log untuk detail", StatusTone::Error);
            }
        }
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = style::status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
    }
}
