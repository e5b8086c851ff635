use super::{Choice, CustomerProfile};

/// Three headline metrics shown above the analysis button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub tenure: String,
    pub monthly_charges: String,
    pub contract: String,
}

impl From<&CustomerProfile> for ProfileSummary {
    fn from(profile: &CustomerProfile) -> Self {
        Self {
            tenure: format!("{} Bln", profile.tenure_months),
            monthly_charges: format!("${:.2}", profile.monthly_charges),
            contract: profile.contract_type.label().to_string(),
        }
    }
}
