//! Closed option sets for the categorical profile fields.

/// A categorical value with a fixed, ordered option list.
///
/// The first option is the default, matching the form's initial selection.
pub trait Choice: Copy + Eq + 'static {
    /// Option labels in display order.
    const LABELS: &'static [&'static str];

    /// Every option in display order.
    fn options() -> &'static [Self];

    /// Label used both in the form and in the feature row.
    fn label(self) -> &'static str;

    /// Parse an exact label back into the option.
    fn parse(value: &str) -> Option<Self> {
        Self::options()
            .iter()
            .copied()
            .find(|option| option.label() == value)
    }

    /// First option in the list.
    fn first() -> Self {
        Self::options()[0]
    }
}

macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[doc = $label]
                $variant,
            )+
        }

        impl Choice for $name {
            const LABELS: &'static [&'static str] = &[$($label),+];

            fn options() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as Choice>::first()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

choice_enum!(
    /// Customer gender as recorded in the billing system.
    Gender { Male => "Male", Female => "Female" }
);

choice_enum!(
    /// Plain yes/no answer.
    YesNo { Yes => "Yes", No => "No" }
);

choice_enum!(
    /// Multi-line status, which depends on having phone service at all.
    PhoneLines { Yes => "Yes", No => "No", NoPhoneService => "No phone service" }
);

choice_enum!(
    /// Internet provider technology.
    InternetService { Dsl => "DSL", FiberOptic => "Fiber optic", No => "No" }
);

choice_enum!(
    /// Add-on service that only exists on top of an internet subscription.
    InternetAddon { Yes => "Yes", No => "No", NoInternetService => "No internet service" }
);

choice_enum!(
    /// Contract term.
    Contract {
        MonthToMonth => "Month-to-month",
        OneYear => "One year",
        TwoYear => "Two year",
    }
);

choice_enum!(
    /// Billing payment channel.
    PaymentMethod {
        ElectronicCheck => "Electronic check",
        MailedCheck => "Mailed check",
        BankTransfer => "Bank transfer (automatic)",
        CreditCard => "Credit card (automatic)",
    }
);
