use std::path::{Path, PathBuf};

use super::{AppSettings, CONFIG_FILE_NAME, ConfigError, map_app_dir_error};

/// Full path of `config.toml`, creating the application directory if needed.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    crate::app_dirs::app_root_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .map_err(map_app_dir_error)
}

/// Load settings from the app directory, falling back to defaults when the file is absent.
pub fn load_or_default() -> Result<AppSettings, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file; using defaults");
        return Ok(AppSettings::default());
    }
    load_settings_from(&path)
}

/// Like [`load_or_default`], but an unreadable or malformed file only logs a warning.
///
/// Every entry point uses this so a broken `config.toml` never blocks startup.
pub fn load_or_fallback() -> AppSettings {
    load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {err}");
        AppSettings::default()
    })
}

/// Parse a settings file. Unknown keys are ignored and blank values normalised.
pub fn load_settings_from(path: &Path) -> Result<AppSettings, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: AppSettings = toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(settings.normalized())
}
