//! Customer churn dashboard: profile form, pretrained classifier, and verdict rendering.
/// Application directory resolution.
pub mod app_dirs;
/// Persistent TOML settings.
pub mod config;
/// egui dashboard.
pub mod egui_app;
/// Tracing setup and log file rotation.
pub mod logging;
/// Classifier artifact loading and inference.
pub mod model;
/// Customer profile fields and form collection.
pub mod profile;
/// Prediction outcome rendering.
pub mod verdict;
