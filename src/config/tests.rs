use std::path::PathBuf;

use tempfile::tempdir;

use super::*;
use crate::app_dirs::{APP_DIR_NAME, ConfigBaseGuard};

#[test]
fn missing_file_yields_defaults() {
    let base = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
    let settings = load_or_default().unwrap();
    assert_eq!(settings, AppSettings::default());
    assert_eq!(settings.model_path, PathBuf::from("model_churn_terbaik.json"));
    assert_eq!(settings.confidence_placeholder, "N/A");
    assert!(settings.form.expand_groups);
}

#[test]
fn save_then_load_keeps_values() {
    let base = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
    let settings = AppSettings {
        model_path: PathBuf::from("models/other.json"),
        confidence_placeholder: "-".into(),
        form: FormSettings {
            expand_groups: false,
        },
    };
    save(&settings).unwrap();
    let path = config_path().unwrap();
    assert_eq!(path, base.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    assert_eq!(load_or_default().unwrap(), settings);
}

#[test]
fn save_leaves_no_temp_files_behind() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
    save_to_path(&AppSettings::default(), &path).unwrap();
    save_to_path(&AppSettings::default(), &path).unwrap();
    let names: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from(CONFIG_FILE_NAME)]);
}

#[test]
fn partial_file_fills_missing_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "confidence_placeholder = \"tidak tersedia\"\n").unwrap();
    let settings = load_settings_from(&path).unwrap();
    assert_eq!(settings.confidence_placeholder, "tidak tersedia");
    assert_eq!(settings.model_path, PathBuf::from("model_churn_terbaik.json"));
    assert!(settings.form.expand_groups);
}

#[test]
fn blank_values_are_normalised() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "model_path = \"\"\nconfidence_placeholder = \"  \"\n").unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), AppSettings::default());
}

#[test]
fn malformed_toml_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "model_path = [").unwrap();
    assert!(matches!(
        load_settings_from(&path),
        Err(ConfigError::ParseToml { .. })
    ));
}

#[test]
fn malformed_app_config_falls_back_to_defaults() {
    let base = tempdir().unwrap();
    let _guard = ConfigBaseGuard::set(base.path().to_path_buf());
    std::fs::write(config_path().unwrap(), "confidence_placeholder = ").unwrap();
    assert!(load_or_default().is_err());
    assert_eq!(load_or_fallback(), AppSettings::default());
}
