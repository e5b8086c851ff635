use eframe::egui::{self, RichText, Ui};

use crate::egui_app::controller::ChurnController;
use crate::egui_app::state::ProfileForm;
use crate::profile::{FieldGroup, FieldKind, ProfileField};

const SENIOR_LABELS: [(bool, &str); 2] = [(false, "Tidak"), (true, "Ya")];

/// Sidebar with the three collapsible input groups.
pub(super) fn render(ui: &mut Ui, controller: &mut ChurnController) {
    ui.add_space(6.0);
    ui.heading("📋 Input Data Pelanggan");
    ui.add_space(6.0);
    let expand = controller.ui.expand_groups;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for group in FieldGroup::ALL {
            egui::CollapsingHeader::new(RichText::new(group.title()).strong())
                .default_open(expand)
                .show(ui, |ui| {
                    for field in group.fields() {
                        field_widget(ui, &mut controller.ui.form, field);
                        ui.add_space(4.0);
                    }
                });
        }
        ui.add_space(8.0);
        if ui.button("Atur Ulang").clicked() {
            controller.reset_form();
        }
    });
}

fn field_widget(ui: &mut Ui, form: &mut ProfileForm, field: ProfileField) {
    ui.label(field.label());
    let width = ui.available_width();
    match field.kind() {
        FieldKind::Choice(options) => {
            let Some(slot) = form.choice_mut(field) else {
                return;
            };
            egui::ComboBox::from_id_salt(field.column())
                .selected_text(*slot)
                .width(width)
                .show_ui(ui, |ui| {
                    for option in options {
                        ui.selectable_value(slot, *option, *option);
                    }
                });
        }
        FieldKind::Flag => {
            let current = SENIOR_LABELS
                .iter()
                .find(|(value, _)| *value == form.is_senior)
                .map_or("Tidak", |(_, label)| *label);
            egui::ComboBox::from_id_salt(field.column())
                .selected_text(current)
                .width(width)
                .show_ui(ui, |ui| {
                    for (value, label) in SENIOR_LABELS {
                        ui.selectable_value(&mut form.is_senior, value, label);
                    }
                });
        }
        FieldKind::Integer { min, max } => {
            if let Some(value) = form.integer_mut(field) {
                ui.add(egui::Slider::new(value, min..=max));
            }
        }
        FieldKind::Number { min, max } => {
            if let Some(value) = form.number_mut(field) {
                ui.add(
                    egui::DragValue::new(value)
                        .range(min..=max)
                        .speed(1.0)
                        .fixed_decimals(2)
                        .prefix("$ "),
                );
            }
        }
    }
}
