use eframe::egui::{self, Frame, Margin, RichText, Stroke, Ui};

use super::style;
use crate::egui_app::state::AnalysisState;

/// Verdict box and recommendation list below the run button.
pub(super) fn render(ui: &mut Ui, analysis: &AnalysisState) {
    let palette = style::palette();
    match analysis {
        AnalysisState::Idle => {}
        AnalysisState::Failed(message) => {
            ui.separator();
            boxed(ui, palette.error, |ui| {
                ui.label(RichText::new(message).color(palette.error));
            });
        }
        AnalysisState::ShowingResult(view) => {
            ui.separator();
            let color = style::verdict_color(view.tone);
            boxed(ui, color, |ui| {
                ui.label(RichText::new(view.headline).size(20.0).strong().color(color));
                ui.add_space(4.0);
                ui.label(&view.detail);
            });
            ui.add_space(8.0);
            egui::CollapsingHeader::new("Lihat Rekomendasi Tindakan")
                .default_open(false)
                .show(ui, |ui| {
                    for action in view.recommendations {
                        ui.label(format!("• {action}"));
                    }
                });
        }
    }
}

fn boxed(ui: &mut Ui, color: egui::Color32, add_contents: impl FnOnce(&mut Ui)) {
    Frame::new()
        .stroke(Stroke::new(1.5, color))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
