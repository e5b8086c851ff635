//! Persistent dashboard settings stored as TOML under the `.churnboard` directory.

mod errors;
mod load;
mod save;
mod types;

pub use errors::ConfigError;
pub use load::{config_path, load_or_default, load_or_fallback, load_settings_from};
pub use save::{save, save_to_path};
pub use types::{AppSettings, FormSettings, MODEL_PATH_ENV};

/// Name of the settings file inside the application directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn map_app_dir_error(error: crate::app_dirs::AppDirError) -> ConfigError {
    match error {
        crate::app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        crate::app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}

#[cfg(test)]
mod tests;
