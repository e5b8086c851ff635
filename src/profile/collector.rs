use super::field::{MONTHLY_CHARGES_RANGE, ProfileField, TENURE_RANGE, TOTAL_CHARGES_RANGE};
use super::{Choice, CustomerProfile};

/// Source of raw form values, one lookup per field.
///
/// Returning `None` means "nothing entered"; the collector then uses the field default.
pub trait ProfileInput {
    /// Selected label of a choice field.
    fn choice(&self, field: ProfileField) -> Option<&str>;
    /// Whole-number value of a flag or integer field.
    fn integer(&self, field: ProfileField) -> Option<i64>;
    /// Decimal value of a number field.
    fn number(&self, field: ProfileField) -> Option<f64>;
}

/// Build a profile from `input`.
///
/// Never fails: missing or out-of-domain choices fall back to the default, numbers are
/// clamped into their range.
pub fn collect<I: ProfileInput + ?Sized>(input: &I) -> CustomerProfile {
    let defaults = CustomerProfile::default();
    CustomerProfile {
        gender: choice(input, ProfileField::Gender, defaults.gender),
        is_senior: match input.integer(ProfileField::SeniorCitizen) {
            None => defaults.is_senior,
            Some(0) => false,
            Some(1) => true,
            Some(_) => {
                fallback(ProfileField::SeniorCitizen);
                defaults.is_senior
            }
        },
        has_partner: choice(input, ProfileField::Partner, defaults.has_partner),
        has_dependents: choice(input, ProfileField::Dependents, defaults.has_dependents),
        tenure_months: input
            .integer(ProfileField::Tenure)
            .map(|months| months.clamp(TENURE_RANGE.0, TENURE_RANGE.1))
            .unwrap_or(defaults.tenure_months),
        has_phone: choice(input, ProfileField::PhoneService, defaults.has_phone),
        multiple_lines: choice(input, ProfileField::MultipleLines, defaults.multiple_lines),
        internet_service: choice(input, ProfileField::InternetService, defaults.internet_service),
        online_security: choice(input, ProfileField::OnlineSecurity, defaults.online_security),
        online_backup: choice(input, ProfileField::OnlineBackup, defaults.online_backup),
        device_protection: choice(
            input,
            ProfileField::DeviceProtection,
            defaults.device_protection,
        ),
        tech_support: choice(input, ProfileField::TechSupport, defaults.tech_support),
        streaming_tv: choice(input, ProfileField::StreamingTv, defaults.streaming_tv),
        streaming_movies: choice(input, ProfileField::StreamingMovies, defaults.streaming_movies),
        contract_type: choice(input, ProfileField::Contract, defaults.contract_type),
        paperless_billing: choice(
            input,
            ProfileField::PaperlessBilling,
            defaults.paperless_billing,
        ),
        payment_method: choice(input, ProfileField::PaymentMethod, defaults.payment_method),
        monthly_charges: number(
            input,
            ProfileField::MonthlyCharges,
            MONTHLY_CHARGES_RANGE,
            defaults.monthly_charges,
        ),
        total_charges: number(
            input,
            ProfileField::TotalCharges,
            TOTAL_CHARGES_RANGE,
            defaults.total_charges,
        ),
    }
}

fn choice<T: Choice, I: ProfileInput + ?Sized>(input: &I, field: ProfileField, default: T) -> T {
    match input.choice(field) {
        None => default,
        Some(label) => T::parse(label).unwrap_or_else(|| {
            fallback(field);
            default
        }),
    }
}

fn number<I: ProfileInput + ?Sized>(
    input: &I,
    field: ProfileField,
    (min, max): (f64, f64),
    default: f64,
) -> f64 {
    match input.number(field) {
        Some(value) if value.is_finite() => value.clamp(min, max),
        Some(_) => {
            fallback(field);
            default
        }
        None => default,
    }
}

fn fallback(field: ProfileField) {
    tracing::debug!(column = field.column(), "Input outside field domain; using default");
}
