//! Shared state types for the egui UI.

use std::collections::HashMap;

use egui::Color32;

use crate::egui_app::ui::style::{self, StatusTone};
use crate::model::FeatureValue;
use crate::profile::{CustomerProfile, ProfileField, ProfileInput};
use crate::verdict::VerdictView;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub form: ProfileForm,
    pub analysis: AnalysisState,
    pub status: StatusBarState,
    /// Open state of the three sidebar groups on first paint.
    pub expand_groups: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            form: ProfileForm::default(),
            analysis: AnalysisState::Idle,
            status: StatusBarState::idle(),
            expand_groups: true,
        }
    }
}

/// What the result panel shows.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisState {
    /// No analysis requested since launch.
    Idle,
    /// Verdict of the most recent analysis.
    ShowingResult(VerdictView),
    /// The last analysis failed; holds the message shown in place of a verdict.
    Failed(String),
}

/// Raw widget values of the sidebar form.
///
/// Choice fields hold the selected label; the other four fields have typed slots.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileForm {
    choices: HashMap<ProfileField, &'static str>,
    pub is_senior: bool,
    pub tenure_months: i64,
    pub monthly_charges: f64,
    pub total_charges: f64,
}

impl ProfileForm {
    /// Widget values that reproduce `profile`.
    pub fn from_profile(profile: &CustomerProfile) -> Self {
        let choices = ProfileField::ALL
            .into_iter()
            .filter_map(|field| match profile.value(field) {
                FeatureValue::Category(label) => Some((field, label)),
                FeatureValue::Number(_) => None,
            })
            .collect();
        Self {
            choices,
            is_senior: profile.is_senior,
            tenure_months: profile.tenure_months,
            monthly_charges: profile.monthly_charges,
            total_charges: profile.total_charges,
        }
    }

    /// Mutable slot of a choice field, for `ComboBox` bindings.
    ///
    /// Returns `None` for the non-choice fields.
    pub fn choice_mut(&mut self, field: ProfileField) -> Option<&mut &'static str> {
        self.choices.get_mut(&field)
    }

    /// Slot of the integer field (tenure) bound to the slider.
    pub fn integer_mut(&mut self, field: ProfileField) -> Option<&mut i64> {
        match field {
            ProfileField::Tenure => Some(&mut self.tenure_months),
            _ => None,
        }
    }

    pub fn number_mut(&mut self, field: ProfileField) -> Option<&mut f64> {
        match field {
            ProfileField::MonthlyCharges => Some(&mut self.monthly_charges),
            ProfileField::TotalCharges => Some(&mut self.total_charges),
            _ => None,
        }
    }

    /// Select `label` for a choice field. Labels outside the field's options are kept
    /// as typed and rejected later by the collector.
    pub fn set_choice(&mut self, field: ProfileField, label: &'static str) {
        if !field.is_numeric() {
            self.choices.insert(field, label);
        }
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::from_profile(&CustomerProfile::default())
    }
}

impl ProfileInput for ProfileForm {
    fn choice(&self, field: ProfileField) -> Option<&str> {
        self.choices.get(&field).copied()
    }

    fn integer(&self, field: ProfileField) -> Option<i64> {
        match field {
            ProfileField::SeniorCitizen => Some(i64::from(self.is_senior)),
            ProfileField::Tenure => Some(self.tenure_months),
            _ => None,
        }
    }

    fn number(&self, field: ProfileField) -> Option<f64> {
        match field {
            ProfileField::MonthlyCharges => Some(self.monthly_charges),
            ProfileField::TotalCharges => Some(self.total_charges),
            _ => None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Status shown before the first analysis.
    pub fn idle() -> Self {
        let (badge_label, badge_color) = style::status_badge(StatusTone::Idle);
        Self {
            text: "Isi profil pelanggan lalu jalankan analisis".into(),
            badge_label,
            badge_color,
        }
    }
}
