//! egui renderer for the dashboard.

mod form;
mod results;
pub mod style;

use eframe::egui::{self, Frame, Margin, RichText, Stroke, Vec2};

use crate::egui_app::controller::ChurnController;

/// Window title.
pub const APP_TITLE: &str = "Analytics: Customer Retention";
/// Smallest usable window size.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(900.0, 620.0);

const INFO_TEXT: &str = "Gunakan panel di samping untuk memasukkan profil pelanggan dan menekan tombol 'Analisis' di bawah.";

/// Renders the dashboard using the shared controller state.
pub struct EguiApp {
    controller: ChurnController,
    visuals_set: bool,
}

impl EguiApp {
    pub fn new(controller: ChurnController) -> Self {
        Self {
            controller,
            visuals_set: false,
        }
    }

    pub fn controller(&self) -> &ChurnController {
        &self.controller
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::new().fill(palette.bg_primary).inner_margin(Margin::same(4)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(4.0);
                    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 6.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).strong());
                    ui.separator();
                    ui.label(&status.text);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(self.controller.model_description())
                                .color(palette.text_muted)
                                .small(),
                        );
                    });
                });
            });
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.heading(RichText::new("Dashboard Prediksi Retensi Pelanggan").size(26.0));
        ui.add_space(6.0);
        Frame::new()
            .fill(palette.info_fill)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(INFO_TEXT);
            });
    }

    fn render_summary(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let summary = self.controller.summary();
        ui.label(RichText::new("Ringkasan Profil").size(18.0).strong());
        ui.add_space(4.0);
        ui.columns(3, |columns| {
            let metrics = [
                ("Tenure", summary.tenure.as_str()),
                ("Biaya/Bln", summary.monthly_charges.as_str()),
                ("Kontrak", summary.contract.as_str()),
            ];
            for (column, (caption, value)) in columns.iter_mut().zip(metrics) {
                column.label(RichText::new(caption).color(palette.text_muted));
                column.label(RichText::new(value).size(22.0));
            }
        });
    }

    fn render_run_button(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let button = egui::Button::new(RichText::new("Jalankan Analisis").strong().size(16.0))
            .fill(palette.accent)
            .stroke(Stroke::NONE);
        if ui
            .add_sized([ui.available_width(), 38.0], button)
            .clicked()
        {
            self.controller.run_analysis();
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.render_status(ctx);
        egui::SidePanel::left("profile_form")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| form::render(ui, &mut self.controller));
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_header(ui);
                ui.add_space(16.0);
                self.render_summary(ui);
                ui.add_space(16.0);
                self.render_run_button(ui);
                results::render(ui, &self.controller.ui.analysis);
            });
        });
    }
}
