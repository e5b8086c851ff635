mod support;

use churnboard::config::{self, AppSettings};
use churnboard::egui_app::controller::ChurnController;
use churnboard::egui_app::state::{AnalysisState, ProfileForm};
use churnboard::model::{
    ArtifactError, ChurnLabel, FeatureRow, PredictionError, PredictionService, Predictor,
};
use churnboard::verdict::VerdictTone;
use support::churnboard_env::ChurnboardEnvGuard;
use support::{at_risk_profile, bundled_model_path, write_margin_artifact};

/// Always answers churn with 90% confidence.
struct AlwaysChurn;

impl Predictor for AlwaysChurn {
    fn predict(&self, _row: &FeatureRow) -> Result<ChurnLabel, PredictionError> {
        Ok(ChurnLabel::Churn)
    }

    fn predict_proba(&self, _row: &FeatureRow) -> Result<[f32; 2], PredictionError> {
        Ok([0.1, 0.9])
    }
}

fn showing(controller: &ChurnController) -> &churnboard::verdict::VerdictView {
    match &controller.ui.analysis {
        AnalysisState::ShowingResult(view) => view,
        other => panic!("expected a verdict, got {other:?}"),
    }
}

#[test]
fn high_risk_customer_gets_retention_actions() {
    let mut controller = ChurnController::new(
        PredictionService::new(AlwaysChurn, "fake"),
        AppSettings::default(),
    );
    controller.ui.form = ProfileForm::from_profile(&at_risk_profile());
    controller.run_analysis();
    let view = showing(&controller);
    assert_eq!(view.tone, VerdictTone::Warning);
    assert_eq!(view.headline, "⚠ Hasil: Berisiko Tinggi (Churn)");
    assert_eq!(
        view.detail,
        "Sistem mendeteksi probabilitas sebesar 90.00% bahwa pelanggan ini akan berhenti."
    );
    assert_eq!(
        view.recommendations,
        [
            "Tawarkan diskon perpanjangan kontrak.",
            "Hubungi pelanggan untuk menanyakan kendala teknis.",
        ]
    );
    let summary = controller.summary();
    assert_eq!(summary.tenure, "2 Bln");
    assert_eq!(summary.monthly_charges, "$95.00");
}

#[test]
fn model_without_probabilities_shows_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_margin_artifact(dir.path());
    let settings = AppSettings {
        model_path: path,
        confidence_placeholder: "tidak tersedia".into(),
        ..AppSettings::default()
    };
    let _env = ChurnboardEnvGuard::new().without_model();
    let mut controller = ChurnController::boot(settings).expect("margin artifact loads");
    controller.run_analysis();
    let view = showing(&controller);
    assert_eq!(view.tone, VerdictTone::Success);
    assert_eq!(view.detail, "Tingkat keyakinan model: tidak tersedia.");
}

#[test]
fn missing_artifact_blocks_startup() {
    let dir = tempfile::tempdir().unwrap();
    let settings = AppSettings {
        model_path: dir.path().join("model_churn_terbaik.json"),
        ..AppSettings::default()
    };
    let _env = ChurnboardEnvGuard::new().without_model();
    let err = ChurnController::boot(settings)
        .err()
        .expect("startup must fail without a model");
    assert!(matches!(err.source, ArtifactError::Missing { .. }));
    assert!(
        err.to_string()
            .starts_with("Sistem gagal memuat model. Pastikan file '")
    );
}

#[test]
fn corrupt_artifact_blocks_startup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_churn_terbaik.json");
    std::fs::write(&path, b"{ not json").unwrap();
    let settings = AppSettings {
        model_path: path,
        ..AppSettings::default()
    };
    let _env = ChurnboardEnvGuard::new().without_model();
    let err = ChurnController::boot(settings).err().expect("corrupt model");
    assert!(matches!(err.source, ArtifactError::Parse { .. }));
    assert!(err.to_string().contains("rusak"), "{err}");
}

#[test]
fn model_env_var_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    let _env = ChurnboardEnvGuard::new()
        .config_home(dir.path())
        .model(&bundled_model_path());
    let settings = AppSettings {
        model_path: dir.path().join("absent.json"),
        ..AppSettings::default()
    };
    assert_eq!(settings.resolved_model_path(), bundled_model_path());
    let mut controller = ChurnController::boot(settings).expect("env path wins");
    controller.ui.form = ProfileForm::from_profile(&at_risk_profile());
    controller.run_analysis();
    assert_eq!(showing(&controller).tone, VerdictTone::Warning);
}

#[test]
fn saved_settings_drive_the_next_boot() {
    let dir = tempfile::tempdir().unwrap();
    let _env = ChurnboardEnvGuard::new()
        .config_home(dir.path())
        .without_model();
    let settings = AppSettings {
        model_path: bundled_model_path(),
        confidence_placeholder: "-".into(),
        ..AppSettings::default()
    };
    config::save(&settings).expect("save settings");
    let loaded = config::load_or_default().expect("load settings");
    assert_eq!(loaded, settings);
    let controller = ChurnController::boot(loaded).expect("boot from saved settings");
    assert!(controller.model_description().contains("logreg"));
}
