/// Canonical answer tokens offered by the profile form.
pub const STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Delhi",
    "Jammu & Kashmir",
    "Ladakh",
];

pub const CASTES: &[&str] = &[
    "All",
    "Scheduled Tribe (ST)",
    "Scheduled Caste (SC)",
    "General",
    "OBC",
    "PVTG",
];

pub const OCCUPATIONS: &[&str] = &[
    "Student",
    "Farmer",
    "Self Employed",
    "Private Employee",
    "Government Employee",
    "Unemployed",
    "Daily Wage Worker",
    "Other",
];

pub const SALARY_RANGES: &[&str] = &[
    "No Income",
    "Below ₹10,000",
    "₹10,000 – ₹25,000",
    "₹25,001 – ₹50,000",
    "₹50,001 – ₹1,00,000",
    "Above ₹1,00,000",
];

/// Closed set of canonical tokens for one profile field.
pub trait Vocabulary: Sized + Copy + 'static {
    /// Field name used in parse errors.
    const FIELD: &'static str;

    fn variants() -> &'static [Self];

    fn token(&self) -> &'static str;

    /// Exact, case-sensitive match on the trimmed input.
    fn parse_token(raw: &str) -> Result<Self, VocabularyError> {
        let trimmed = raw.trim();
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.token() == trimmed)
            .ok_or_else(|| VocabularyError::Unrecognized {
                field: Self::FIELD,
                value: trimmed.to_string(),
            })
    }

    fn tokens() -> Vec<&'static str> {
        Self::variants().iter().map(Self::token).collect()
    }
}

/// Raised when free text does not map onto a canonical token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("unrecognized {field} value '{value}'")]
    Unrecognized { field: &'static str, value: String },
}
