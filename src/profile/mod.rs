//! Customer service profile collected from the form.
//!
//! A [`CustomerProfile`] holds the 19 inputs the churn classifier was trained on.
//! [`collect`] builds one from any [`ProfileInput`], falling back to field defaults,
//! and [`CustomerProfile::to_row`] lays it out in the classifier's column order.

mod choice;
mod collector;
mod field;
mod summary;

pub use choice::{
    Choice, Contract, Gender, InternetAddon, InternetService, PaymentMethod, PhoneLines, YesNo,
};
pub use collector::{ProfileInput, collect};
pub use field::{
    FieldGroup, FieldKind, MONTHLY_CHARGES_RANGE, ProfileField, TENURE_RANGE, TOTAL_CHARGES_RANGE,
};
pub use summary::ProfileSummary;

use crate::model::{FeatureRow, FeatureValue};

/// One customer's service profile.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerProfile {
    pub gender: Gender,
    pub is_senior: bool,
    pub has_partner: YesNo,
    pub has_dependents: YesNo,
    pub tenure_months: i64,
    pub has_phone: YesNo,
    pub multiple_lines: PhoneLines,
    pub internet_service: InternetService,
    pub online_security: InternetAddon,
    pub online_backup: InternetAddon,
    pub device_protection: InternetAddon,
    pub tech_support: InternetAddon,
    pub streaming_tv: InternetAddon,
    pub streaming_movies: InternetAddon,
    pub contract_type: Contract,
    pub paperless_billing: YesNo,
    pub payment_method: PaymentMethod,
    pub monthly_charges: f64,
    pub total_charges: f64,
}

/// Default tenure shown on the slider.
pub const DEFAULT_TENURE_MONTHS: i64 = 12;
/// Default monthly charge.
pub const DEFAULT_MONTHLY_CHARGES: f64 = 70.0;
/// Default accumulated charge.
pub const DEFAULT_TOTAL_CHARGES: f64 = 800.0;

impl Default for CustomerProfile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            is_senior: false,
            has_partner: YesNo::default(),
            has_dependents: YesNo::default(),
            tenure_months: DEFAULT_TENURE_MONTHS,
            has_phone: YesNo::default(),
            multiple_lines: PhoneLines::default(),
            internet_service: InternetService::default(),
            online_security: InternetAddon::default(),
            online_backup: InternetAddon::default(),
            device_protection: InternetAddon::default(),
            tech_support: InternetAddon::default(),
            streaming_tv: InternetAddon::default(),
            streaming_movies: InternetAddon::default(),
            contract_type: Contract::default(),
            paperless_billing: YesNo::default(),
            payment_method: PaymentMethod::default(),
            monthly_charges: DEFAULT_MONTHLY_CHARGES,
            total_charges: DEFAULT_TOTAL_CHARGES,
        }
    }
}

impl CustomerProfile {
    /// Value of a single field as it appears in the feature row.
    pub fn value(&self, field: ProfileField) -> FeatureValue {
        let category = |label: &'static str| FeatureValue::Category(label);
        match field {
            ProfileField::Gender => category(self.gender.label()),
            ProfileField::SeniorCitizen => FeatureValue::Number(f64::from(u8::from(self.is_senior))),
            ProfileField::Partner => category(self.has_partner.label()),
            ProfileField::Dependents => category(self.has_dependents.label()),
            ProfileField::Tenure => FeatureValue::Number(self.tenure_months as f64),
            ProfileField::PhoneService => category(self.has_phone.label()),
            ProfileField::MultipleLines => category(self.multiple_lines.label()),
            ProfileField::InternetService => category(self.internet_service.label()),
            ProfileField::OnlineSecurity => category(self.online_security.label()),
            ProfileField::OnlineBackup => category(self.online_backup.label()),
            ProfileField::DeviceProtection => category(self.device_protection.label()),
            ProfileField::TechSupport => category(self.tech_support.label()),
            ProfileField::StreamingTv => category(self.streaming_tv.label()),
            ProfileField::StreamingMovies => category(self.streaming_movies.label()),
            ProfileField::Contract => category(self.contract_type.label()),
            ProfileField::PaperlessBilling => category(self.paperless_billing.label()),
            ProfileField::PaymentMethod => category(self.payment_method.label()),
            ProfileField::MonthlyCharges => FeatureValue::Number(self.monthly_charges),
            ProfileField::TotalCharges => FeatureValue::Number(self.total_charges),
        }
    }

    /// Lay the profile out as one feature row in [`ProfileField::ALL`] order.
    pub fn to_row(&self) -> FeatureRow {
        FeatureRow::from_cells(
            ProfileField::ALL
                .into_iter()
                .map(|field| (field.column(), self.value(field))),
        )
    }
}
