use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vocabulary::{Vocabulary, VocabularyError};

/// Portal shown when a scheme carries no official website.
pub const DEFAULT_SCHEME_PORTAL: &str = "https://www.myscheme.gov.in";

/// Unique display key of a scheme within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeName(pub String);

impl SchemeName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SchemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemeName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Administering level of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeType {
    Central,
    State,
}

impl SchemeType {
    /// Anything other than "central" (any case) is a state scheme.
    pub fn classify(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("central") {
            Self::Central
        } else {
            Self::State
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchemeType::Central => "Central",
            SchemeType::State => "State",
        }
    }
}

/// Eligibility rule on one profile field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "allowed")]
pub enum Constraint<T> {
    Unconstrained,
    Constrained(BTreeSet<T>),
}

impl<T> Default for Constraint<T> {
    fn default() -> Self {
        Self::Unconstrained
    }
}

impl<T: Ord> Constraint<T> {
    pub fn only(value: T) -> Self {
        Self::Constrained(BTreeSet::from([value]))
    }

    pub fn any_of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::Constrained(values.into_iter().collect())
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Constraint::Unconstrained)
    }

    pub fn allowed(&self) -> Option<&BTreeSet<T>> {
        match self {
            Constraint::Unconstrained => None,
            Constraint::Constrained(allowed) => Some(allowed),
        }
    }

    /// An absent profile value never satisfies an active constraint.
    pub fn permits(&self, value: Option<&T>) -> bool {
        match self {
            Constraint::Unconstrained => true,
            Constraint::Constrained(allowed) => value.is_some_and(|value| allowed.contains(value)),
        }
    }
}

impl Constraint<String> {
    pub fn any_of_str<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::any_of(values.into_iter().map(str::to_string))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Vocabulary for Gender {
    const FIELD: &'static str = "gender";

    fn variants() -> &'static [Self] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    fn token(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Residence {
    Urban,
    Rural,
}

impl Vocabulary for Residence {
    const FIELD: &'static str = "residence";

    fn variants() -> &'static [Self] {
        &[Residence::Urban, Residence::Rural]
    }

    fn token(&self) -> &'static str {
        match self {
            Residence::Urban => "Urban",
            Residence::Rural => "Rural",
        }
    }
}

/// Answer to the minority and differently-abled questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum YesNo {
    Yes,
    No,
}

impl Vocabulary for YesNo {
    const FIELD: &'static str = "yes/no";

    fn variants() -> &'static [Self] {
        &[YesNo::Yes, YesNo::No]
    }

    fn token(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }
}

impl FromStr for Gender {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

impl FromStr for Residence {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

impl FromStr for YesNo {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

/// One catalog entry and its eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeRecord {
    pub name: SchemeName,
    pub description: String,
    #[serde(rename = "type")]
    pub scheme_type: SchemeType,
    pub website: Option<String>,
    pub min_age: u32,
    pub gender: Constraint<Gender>,
    pub states: Constraint<String>,
    pub occupations: Constraint<String>,
    pub residence: Constraint<Residence>,
    pub minority: Constraint<YesNo>,
    pub disabled: Constraint<YesNo>,
}

impl SchemeRecord {
    /// Record open to every applicant of any age.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        scheme_type: SchemeType,
    ) -> Self {
        Self {
            name: SchemeName(name.into()),
            description: description.into(),
            scheme_type,
            website: None,
            min_age: 0,
            gender: Constraint::Unconstrained,
            states: Constraint::Unconstrained,
            occupations: Constraint::Unconstrained,
            residence: Constraint::Unconstrained,
            minority: Constraint::Unconstrained,
            disabled: Constraint::Unconstrained,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Constraint::only(gender);
        self
    }

    pub fn with_states<'a, I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.states = Constraint::any_of_str(states);
        self
    }

    pub fn with_occupations<'a, I>(mut self, occupations: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.occupations = Constraint::any_of_str(occupations);
        self
    }

    pub fn with_residence(mut self, residence: Residence) -> Self {
        self.residence = Constraint::only(residence);
        self
    }

    pub fn with_minority(mut self, minority: YesNo) -> Self {
        self.minority = Constraint::only(minority);
        self
    }

    pub fn with_disabled(mut self, disabled: YesNo) -> Self {
        self.disabled = Constraint::only(disabled);
        self
    }

    pub fn is_central(&self) -> bool {
        self.scheme_type == SchemeType::Central
    }

    pub fn website_or_default(&self) -> &str {
        self.website
            .as_deref()
            .filter(|website| !website.trim().is_empty())
            .unwrap_or(DEFAULT_SCHEME_PORTAL)
    }
}

/// Applicant answers in canonical vocabulary.
///
/// `caste` and `salary` travel with the profile but do not take part in matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Option<Gender>,
    pub state: Option<String>,
    pub occupation: Option<String>,
    pub residence: Option<Residence>,
    pub minority: Option<YesNo>,
    pub disabled: Option<YesNo>,
    pub caste: Option<String>,
    pub salary: Option<String>,
}
