//! egui dashboard: form state, the controller that runs analyses, and the renderer.

pub mod controller;
pub mod state;
pub mod ui;
