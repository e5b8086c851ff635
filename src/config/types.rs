use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MODEL_FILE;
use crate::verdict::DEFAULT_CONFIDENCE_PLACEHOLDER;

/// Environment variable that overrides `model_path`.
pub const MODEL_PATH_ENV: &str = "CHURNBOARD_MODEL";

/// Dashboard settings persisted in `config.toml`.
///
/// Config keys (TOML): `model_path`, `confidence_placeholder`, `form.expand_groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Artifact location; relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Shown instead of a percentage when the model has no probability output.
    #[serde(default = "default_placeholder")]
    pub confidence_placeholder: String,
    #[serde(default)]
    pub form: FormSettings,
}

/// Sidebar form presentation.
///
/// Config keys: `expand_groups`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Start with all three input groups expanded.
    #[serde(default = "default_true")]
    pub expand_groups: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            expand_groups: true,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            confidence_placeholder: default_placeholder(),
            form: FormSettings::default(),
        }
    }
}

impl AppSettings {
    /// Replace blank values with their defaults.
    pub(crate) fn normalized(mut self) -> Self {
        if self.model_path.as_os_str().is_empty() {
            self.model_path = default_model_path();
        }
        if self.confidence_placeholder.trim().is_empty() {
            self.confidence_placeholder = default_placeholder();
        }
        self
    }

    /// Artifact path after applying the `CHURNBOARD_MODEL` override.
    pub fn resolved_model_path(&self) -> PathBuf {
        match std::env::var_os(MODEL_PATH_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.model_path.clone(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from(DEFAULT_MODEL_FILE)
}

fn default_placeholder() -> String {
    DEFAULT_CONFIDENCE_PLACEHOLDER.to_string()
}

fn default_true() -> bool {
    true
}
