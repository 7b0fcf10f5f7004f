use super::{annotate, Locale, Translator};
use crate::schemes::domain::{Gender, Residence, YesNo};
use crate::schemes::vocabulary::{Vocabulary, CASTES, OCCUPATIONS, SALARY_RANGES, STATES};
use serde::Serialize;

/// Enumerated questions on the profile form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    State,
    Gender,
    Caste,
    Residence,
    Occupation,
    Salary,
    Minority,
    Disabled,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::State,
        FormField::Gender,
        FormField::Caste,
        FormField::Residence,
        FormField::Occupation,
        FormField::Salary,
        FormField::Minority,
        FormField::Disabled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::State => "State",
            FormField::Gender => "Gender",
            FormField::Caste => "Caste",
            FormField::Residence => "Residence",
            FormField::Occupation => "Occupation",
            FormField::Salary => "Monthly Salary",
            FormField::Minority => "Minority",
            FormField::Disabled => "Differently Abled",
        }
    }

    pub fn canonical_options(&self) -> Vec<&'static str> {
        match self {
            FormField::State => STATES.to_vec(),
            FormField::Gender => Gender::tokens(),
            FormField::Caste => CASTES.to_vec(),
            FormField::Residence => Residence::tokens(),
            FormField::Occupation => OCCUPATIONS.to_vec(),
            FormField::Salary => SALARY_RANGES.to_vec(),
            FormField::Minority | FormField::Disabled => YesNo::tokens(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub value: &'static str,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldOptions {
    pub field: FormField,
    pub label: String,
    pub options: Vec<FormOption>,
}

/// Localized choices for every enumerated question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOptions {
    pub locale: Locale,
    pub fields: Vec<FormFieldOptions>,
}

impl FormOptions {
    pub fn localized<T: Translator + ?Sized>(translator: &T, locale: &Locale) -> Self {
        let fields = FormField::ALL
            .iter()
            .map(|field| FormFieldOptions {
                field: *field,
                label: annotate(translator, field.label(), locale),
                options: field
                    .canonical_options()
                    .into_iter()
                    .map(|value| FormOption {
                        value,
                        display: annotate(translator, value, locale),
                    })
                    .collect(),
            })
            .collect();

        Self {
            locale: locale.clone(),
            fields,
        }
    }

    /// Map a displayed label back to its canonical token.
    pub fn canonical_for(&self, field: FormField, display: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|entry| entry.field == field)?
            .options
            .iter()
            .find(|option| option.display == display || option.value == display)
            .map(|option| option.value)
    }
}
