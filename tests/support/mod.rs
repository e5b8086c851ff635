#![allow(dead_code)]

pub mod churnboard_env;

use std::path::{Path, PathBuf};

use churnboard::model::{Classifier, FeatureSchema, LinearMarginModel, ModelArtifact};
use churnboard::profile::{
    Contract, CustomerProfile, Gender, InternetAddon, InternetService, PaymentMethod, YesNo,
};

/// Artifact shipped in `assets/`.
pub fn bundled_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("model_churn_terbaik.json")
}

/// Senior, two months in, on fiber with no support add-ons.
pub fn at_risk_profile() -> CustomerProfile {
    CustomerProfile {
        gender: Gender::Female,
        is_senior: true,
        has_partner: YesNo::No,
        has_dependents: YesNo::No,
        tenure_months: 2,
        internet_service: InternetService::FiberOptic,
        online_security: InternetAddon::No,
        online_backup: InternetAddon::No,
        tech_support: InternetAddon::No,
        contract_type: Contract::MonthToMonth,
        monthly_charges: 95.0,
        total_charges: 190.0,
        ..CustomerProfile::default()
    }
}

/// Five years on a two-year contract with automatic card payment.
pub fn loyal_profile() -> CustomerProfile {
    CustomerProfile {
        tenure_months: 60,
        contract_type: Contract::TwoYear,
        paperless_billing: YesNo::No,
        payment_method: PaymentMethod::CreditCard,
        monthly_charges: 50.0,
        total_charges: 3000.0,
        ..CustomerProfile::default()
    }
}

/// Write an artifact whose classifier has no probability output.
pub fn write_margin_artifact(dir: &Path) -> PathBuf {
    let schema = FeatureSchema::profile_layout();
    let input_len = schema.encoded_len();
    let artifact = ModelArtifact {
        model_id: "margin".into(),
        model_version: 1,
        columns: schema,
        classifier: Classifier::LinearMargin(LinearMarginModel {
            classes: vec!["0".into(), "1".into()],
            input_len,
            weights: vec![0.0; input_len],
            bias: -1.0,
        }),
    };
    let path = dir.join("margin.json");
    std::fs::write(&path, serde_json::to_vec_pretty(&artifact).expect("serialize artifact"))
        .expect("write artifact");
    path
}
