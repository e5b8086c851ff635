use super::choice::{
    Choice, Contract, Gender, InternetAddon, InternetService, PaymentMethod, PhoneLines, YesNo,
};

/// Inclusive tenure range in months.
pub const TENURE_RANGE: (i64, i64) = (0, 72);
/// Inclusive monthly charge range in dollars.
pub const MONTHLY_CHARGES_RANGE: (f64, f64) = (0.0, 200.0);
/// Inclusive accumulated charge range in dollars.
pub const TOTAL_CHARGES_RANGE: (f64, f64) = (0.0, 10_000.0);

/// One of the 19 inputs of a customer profile, in feature-row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Gender,
    SeniorCitizen,
    Partner,
    Dependents,
    Tenure,
    PhoneService,
    MultipleLines,
    InternetService,
    OnlineSecurity,
    OnlineBackup,
    DeviceProtection,
    TechSupport,
    StreamingTv,
    StreamingMovies,
    Contract,
    PaperlessBilling,
    PaymentMethod,
    MonthlyCharges,
    TotalCharges,
}

/// Sidebar section a field is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    BasicProfile,
    Connectivity,
    ContractBilling,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 3] = [
        FieldGroup::BasicProfile,
        FieldGroup::Connectivity,
        FieldGroup::ContractBilling,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FieldGroup::BasicProfile => "Profil Dasar",
            FieldGroup::Connectivity => "Layanan Koneksi",
            FieldGroup::ContractBilling => "Detail Kontrak & Biaya",
        }
    }

    /// Fields of this group in the order they appear on screen.
    pub fn fields(self) -> impl Iterator<Item = ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(move |field| field.group() == self)
    }
}

/// Input shape of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Pick one label out of a closed list.
    Choice(&'static [&'static str]),
    /// 0/1 flag shown as Tidak/Ya.
    Flag,
    /// Whole number in an inclusive range.
    Integer { min: i64, max: i64 },
    /// Decimal number in an inclusive range.
    Number { min: f64, max: f64 },
}

impl ProfileField {
    pub const COUNT: usize = 19;

    /// Every field in feature-row order.
    pub const ALL: [ProfileField; ProfileField::COUNT] = [
        ProfileField::Gender,
        ProfileField::SeniorCitizen,
        ProfileField::Partner,
        ProfileField::Dependents,
        ProfileField::Tenure,
        ProfileField::PhoneService,
        ProfileField::MultipleLines,
        ProfileField::InternetService,
        ProfileField::OnlineSecurity,
        ProfileField::OnlineBackup,
        ProfileField::DeviceProtection,
        ProfileField::TechSupport,
        ProfileField::StreamingTv,
        ProfileField::StreamingMovies,
        ProfileField::Contract,
        ProfileField::PaperlessBilling,
        ProfileField::PaymentMethod,
        ProfileField::MonthlyCharges,
        ProfileField::TotalCharges,
    ];

    /// Column name the classifier was trained with.
    pub fn column(self) -> &'static str {
        match self {
            ProfileField::Gender => "gender",
            ProfileField::SeniorCitizen => "SeniorCitizen",
            ProfileField::Partner => "Partner",
            ProfileField::Dependents => "Dependents",
            ProfileField::Tenure => "tenure",
            ProfileField::PhoneService => "PhoneService",
            ProfileField::MultipleLines => "MultipleLines",
            ProfileField::InternetService => "InternetService",
            ProfileField::OnlineSecurity => "OnlineSecurity",
            ProfileField::OnlineBackup => "OnlineBackup",
            ProfileField::DeviceProtection => "DeviceProtection",
            ProfileField::TechSupport => "TechSupport",
            ProfileField::StreamingTv => "StreamingTV",
            ProfileField::StreamingMovies => "StreamingMovies",
            ProfileField::Contract => "Contract",
            ProfileField::PaperlessBilling => "PaperlessBilling",
            ProfileField::PaymentMethod => "PaymentMethod",
            ProfileField::MonthlyCharges => "MonthlyCharges",
            ProfileField::TotalCharges => "TotalCharges",
        }
    }

    /// Inverse of [`ProfileField::column`].
    pub fn from_column(column: &str) -> Option<Self> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.column() == column)
    }

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Gender => "Jenis Kelamin",
            ProfileField::SeniorCitizen => "Status Lansia",
            ProfileField::Partner => "Memiliki Pasangan",
            ProfileField::Dependents => "Tanggungan Keluarga",
            ProfileField::Tenure => "Masa Berlangganan (Bulan)",
            ProfileField::PhoneService => "Layanan Telepon",
            ProfileField::MultipleLines => "Multi-Line",
            ProfileField::InternetService => "Provider Internet",
            ProfileField::OnlineSecurity => "Keamanan Online",
            ProfileField::OnlineBackup => "Backup Online",
            ProfileField::DeviceProtection => "Proteksi Perangkat",
            ProfileField::TechSupport => "Dukungan Teknis",
            ProfileField::StreamingTv => "Streaming TV",
            ProfileField::StreamingMovies => "Streaming Movies",
            ProfileField::Contract => "Tipe Kontrak",
            ProfileField::PaperlessBilling => "Tagihan Digital (Paperless)",
            ProfileField::PaymentMethod => "Metode Pembayaran",
            ProfileField::MonthlyCharges => "Biaya Bulanan ($)",
            ProfileField::TotalCharges => "Total Akumulasi Biaya ($)",
        }
    }

    pub fn group(self) -> FieldGroup {
        match self {
            ProfileField::Gender
            | ProfileField::SeniorCitizen
            | ProfileField::Partner
            | ProfileField::Dependents
            | ProfileField::Tenure => FieldGroup::BasicProfile,
            ProfileField::PhoneService
            | ProfileField::MultipleLines
            | ProfileField::InternetService
            | ProfileField::OnlineSecurity
            | ProfileField::OnlineBackup
            | ProfileField::DeviceProtection
            | ProfileField::TechSupport
            | ProfileField::StreamingTv
            | ProfileField::StreamingMovies => FieldGroup::Connectivity,
            ProfileField::Contract
            | ProfileField::PaperlessBilling
            | ProfileField::PaymentMethod
            | ProfileField::MonthlyCharges
            | ProfileField::TotalCharges => FieldGroup::ContractBilling,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ProfileField::Gender => FieldKind::Choice(Gender::LABELS),
            ProfileField::SeniorCitizen => FieldKind::Flag,
            ProfileField::Partner
            | ProfileField::Dependents
            | ProfileField::PhoneService
            | ProfileField::PaperlessBilling => FieldKind::Choice(YesNo::LABELS),
            ProfileField::Tenure => FieldKind::Integer {
                min: TENURE_RANGE.0,
                max: TENURE_RANGE.1,
            },
            ProfileField::MultipleLines => FieldKind::Choice(PhoneLines::LABELS),
            ProfileField::InternetService => FieldKind::Choice(InternetService::LABELS),
            ProfileField::OnlineSecurity
            | ProfileField::OnlineBackup
            | ProfileField::DeviceProtection
            | ProfileField::TechSupport
            | ProfileField::StreamingTv
            | ProfileField::StreamingMovies => FieldKind::Choice(InternetAddon::LABELS),
            ProfileField::Contract => FieldKind::Choice(Contract::LABELS),
            ProfileField::PaymentMethod => FieldKind::Choice(PaymentMethod::LABELS),
            ProfileField::MonthlyCharges => FieldKind::Number {
                min: MONTHLY_CHARGES_RANGE.0,
                max: MONTHLY_CHARGES_RANGE.1,
            },
            ProfileField::TotalCharges => FieldKind::Number {
                min: TOTAL_CHARGES_RANGE.0,
                max: TOTAL_CHARGES_RANGE.1,
            },
        }
    }

    /// Whether the classifier sees this column as a number rather than a category.
    pub fn is_numeric(self) -> bool {
        !matches!(self.kind(), FieldKind::Choice(_))
    }
}
