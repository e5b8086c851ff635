//! Headless scorer: classify one profile from the command line with the dashboard's model.

use std::collections::HashMap;
use std::path::PathBuf;

use churnboard::config::{self, AppSettings};
use churnboard::model::PredictionService;
use churnboard::profile::{ProfileField, ProfileInput, ProfileSummary, collect};
use churnboard::verdict;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Default)]
struct CliOptions {
    model_path: Option<PathBuf>,
    values: HashMap<ProfileField, String>,
}

impl ProfileInput for CliOptions {
    fn choice(&self, field: ProfileField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    fn integer(&self, field: ProfileField) -> Option<i64> {
        self.values.get(&field)?.parse().ok()
    }

    fn number(&self, field: ProfileField) -> Option<f64> {
        self.values.get(&field)?.parse().ok()
    }
}

fn run() -> Result<(), String> {
    let options = parse_args(std::env::args().skip(1).collect())?;
    for line in score(&options, &config::load_or_fallback())? {
        println!("{line}");
    }
    Ok(())
}

/// Load the model, classify the profile and return the report lines.
fn score(options: &CliOptions, settings: &AppSettings) -> Result<Vec<String>, String> {
    let model_path = options
        .model_path
        .clone()
        .unwrap_or_else(|| settings.resolved_model_path());
    let service = PredictionService::load(&model_path).map_err(|err| err.to_string())?;

    let profile = collect(options);
    let summary = ProfileSummary::from(&profile);
    let result =
        verdict::evaluate(&profile, service.predictor()).map_err(|err| err.to_string())?;
    let view = verdict::render(&result, &settings.confidence_placeholder);

    let mut lines = vec![
        format!("model: {}", service.description()),
        format!(
            "tenure={}  monthly={}  contract={}",
            summary.tenure, summary.monthly_charges, summary.contract
        ),
        view.headline.to_string(),
        view.detail,
    ];
    lines.extend(view.recommendations.iter().map(|action| format!("- {action}")));
    Ok(lines)
}

fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => return Err(help_text()),
            "--model" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--model requires a value".to_string())?;
                options.model_path = Some(PathBuf::from(value));
            }
            "--set" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--set requires column=value".to_string())?;
                let (column, raw) = value
                    .split_once('=')
                    .ok_or_else(|| format!("Invalid --set value: {value}"))?;
                let field = ProfileField::from_column(column.trim())
                    .ok_or_else(|| format!("Unknown column: {column}"))?;
                options.values.insert(field, raw.trim().to_string());
            }
            unknown => return Err(format!("Unknown argument: {unknown}\n\n{}", help_text())),
        }
        idx += 1;
    }
    Ok(options)
}

fn help_text() -> String {
    [
        "churnboard-score",
        "",
        "Usage:",
        "  churnboard-score [--model <path>] [--set <column>=<value>]...",
        "",
        "Columns use the training names, e.g. --set tenure=2 --set Contract=Month-to-month.",
        "Unset or invalid values fall back to the form defaults.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn set_flags_fill_the_profile() {
        let options = parse_args(args(&[
            "--set",
            "tenure=2",
            "--set",
            "SeniorCitizen=1",
            "--set",
            "MonthlyCharges=95.5",
            "--set",
            "gender=Female",
        ]))
        .unwrap();
        let profile = collect(&options);
        assert_eq!(profile.tenure_months, 2);
        assert!(profile.is_senior);
        assert_eq!(profile.monthly_charges, 95.5);
        assert_eq!(profile.gender.to_string(), "Female");
    }

    #[test]
    fn unknown_column_is_rejected() {
        assert!(parse_args(args(&["--set", "customerID=1"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    fn bundled_model() -> String {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join("model_churn_terbaik.json")
            .display()
            .to_string()
    }

    #[test]
    fn missing_model_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json").display().to_string();
        let options = parse_args(args(&["--model", &missing])).unwrap();
        let err = score(&options, &AppSettings::default()).unwrap_err();
        assert!(err.contains("absent.json"), "{err}");
    }

    #[test]
    fn unparsable_value_keeps_the_default() {
        let options = parse_args(args(&["--model", &bundled_model(), "--set", "tenure=abc"])).unwrap();
        assert_eq!(collect(&options).tenure_months, 12);
        let lines = score(&options, &AppSettings::default()).unwrap();
        assert!(lines[1].starts_with("tenure=12 Bln"), "{}", lines[1]);
    }

    #[test]
    fn at_risk_profile_prints_churn_headline() {
        let options = parse_args(args(&[
            "--model",
            &bundled_model(),
            "--set",
            "gender=Female",
            "--set",
            "SeniorCitizen=1",
            "--set",
            "Partner=No",
            "--set",
            "Dependents=No",
            "--set",
            "tenure=2",
            "--set",
            "InternetService=Fiber optic",
            "--set",
            "OnlineSecurity=No",
            "--set",
            "OnlineBackup=No",
            "--set",
            "TechSupport=No",
            "--set",
            "MonthlyCharges=95",
            "--set",
            "TotalCharges=190",
        ]))
        .unwrap();
        let lines = score(&options, &AppSettings::default()).unwrap();
        assert!(lines[0].contains("logreg"), "{}", lines[0]);
        assert_eq!(lines[2], "⚠ Hasil: Berisiko Tinggi (Churn)");
        assert_eq!(lines[4], "- Tawarkan diskon perpanjangan kontrak.");
        assert_eq!(lines.len(), 6);
    }
}
