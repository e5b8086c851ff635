//! Entry point for the churn dashboard.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use churnboard::config;
use churnboard::egui_app::controller::ChurnController;
use churnboard::egui_app::ui::{APP_TITLE, EguiApp, MIN_VIEWPORT_SIZE};
use churnboard::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let boot = ChurnController::boot(config::load_or_fallback());

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([1100.0, 760.0]);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| match boot {
            Ok(controller) => Ok(Box::new(EguiApp::new(controller))),
            Err(err) => Ok(Box::new(LaunchError {
                headline: err.to_string(),
                detail: err.source.to_string(),
            })),
        }),
    )?;
    Ok(())
}

/// Minimal fallback app shown when the model cannot be loaded.
struct LaunchError {
    headline: String,
    detail: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let color = ui.visuals().error_fg_color;
                ui.add_space(40.0);
                ui.heading(egui::RichText::new(&self.headline).color(color));
                ui.add_space(8.0);
                ui.label(&self.detail);
            });
        });
    }
}
