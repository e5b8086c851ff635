use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::verdict::VerdictTone;

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub info_fill: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub error: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 16, 20),
        bg_secondary: Color32::from_rgb(24, 27, 32),
        bg_tertiary: Color32::from_rgb(40, 44, 52),
        panel_outline: Color32::from_rgb(48, 54, 62),
        text_primary: Color32::from_rgb(214, 220, 228),
        text_muted: Color32::from_rgb(140, 148, 160),
        accent: Color32::from_rgb(214, 64, 69),
        info_fill: Color32::from_rgb(26, 46, 70),
        warning: Color32::from_rgb(192, 138, 43),
        success: Color32::from_rgb(64, 140, 112),
        error: Color32::from_rgb(192, 57, 43),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        set_flat(widget, palette);
    }
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn set_flat(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Footer badge tone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Info,
    Warning,
    Error,
}

/// Badge label and color for a status tone.
pub fn status_badge(tone: StatusTone) -> (String, Color32) {
    let palette = palette();
    match tone {
        StatusTone::Idle => ("Siap".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Info => ("Info".into(), palette.success),
        StatusTone::Warning => ("Peringatan".into(), palette.warning),
        StatusTone::Error => ("Galat".into(), palette.error),
    }
}

/// Border and heading color of the verdict box.
pub fn verdict_color(tone: VerdictTone) -> Color32 {
    let palette = palette();
    match tone {
        VerdictTone::Warning => palette.warning,
        VerdictTone::Success => palette.success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_tones_use_distinct_colors() {
        assert_ne!(
            verdict_color(VerdictTone::Warning),
            verdict_color(VerdictTone::Success)
        );
    }

    #[test]
    fn error_badge_is_red() {
        let (label, color) = status_badge(StatusTone::Error);
        assert_eq!(label, "Galat");
        assert_eq!(color, palette().error);
    }
}
