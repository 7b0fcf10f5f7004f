use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::domain::UserProfile;
use super::vocabulary::{Vocabulary, VocabularyError};

/// Raw answers as submitted by the form, already mapped back to canonical tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    #[serde(default, deserialize_with = "lenient_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub residence: Option<String>,
    #[serde(default)]
    pub minority: Option<String>,
    #[serde(default)]
    pub disabled: Option<String>,
    #[serde(default)]
    pub caste: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

impl ProfileForm {
    /// Coerce the answers into a typed profile.
    ///
    /// Age never fails: anything that is not a non-negative integer becomes 0.
    /// Enumerated answers must use canonical tokens; blank answers become `None`.
    pub fn into_profile(self) -> Result<UserProfile, VocabularyError> {
        Ok(UserProfile {
            age: coerce_age(self.age.as_deref()),
            gender: parse_optional(self.gender.as_deref())?,
            state: non_blank(self.state),
            occupation: non_blank(self.occupation),
            residence: parse_optional(self.residence.as_deref())?,
            minority: parse_optional(self.minority.as_deref())?,
            disabled: parse_optional(self.disabled.as_deref())?,
            caste: non_blank(self.caste),
            salary: non_blank(self.salary),
        })
    }
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            age: Some(profile.age.to_string()),
            gender: profile.gender.map(|value| value.token().to_string()),
            state: profile.state.clone(),
            occupation: profile.occupation.clone(),
            residence: profile.residence.map(|value| value.token().to_string()),
            minority: profile.minority.map(|value| value.token().to_string()),
            disabled: profile.disabled.map(|value| value.token().to_string()),
            caste: profile.caste.clone(),
            salary: profile.salary.clone(),
        }
    }
}

pub(crate) fn coerce_age(raw: Option<&str>) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return 0;
    };

    match raw.parse::<u32>() {
        Ok(age) => age,
        Err(_) => {
            debug!(value = raw, "unparsable age treated as 0");
            0
        }
    }
}

fn parse_optional<T: Vocabulary>(raw: Option<&str>) -> Result<Option<T>, VocabularyError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => T::parse_token(value).map(Some),
        None => Ok(None),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAnswer {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

/// Accepts `"25"` as well as `25` for form fields that arrive as JSON numbers.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawAnswer>::deserialize(deserializer)?;
    Ok(raw.map(|answer| match answer {
        RawAnswer::Text(text) => text,
        RawAnswer::Integer(value) => value.to_string(),
        RawAnswer::Decimal(value) => value.to_string(),
    }))
}
