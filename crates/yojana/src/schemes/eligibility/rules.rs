use super::Predicate;
use crate::schemes::domain::{Constraint, SchemeRecord, UserProfile};
use crate::schemes::vocabulary::Vocabulary;

pub(crate) fn holds(predicate: Predicate, scheme: &SchemeRecord, profile: &UserProfile) -> bool {
    match predicate {
        Predicate::MinimumAge => profile.age >= scheme.min_age,
        Predicate::Gender => scheme.gender.permits(profile.gender.as_ref()),
        Predicate::State => scheme.states.permits(profile.state.as_ref()),
        Predicate::Occupation => scheme.occupations.permits(profile.occupation.as_ref()),
        Predicate::Residence => scheme.residence.permits(profile.residence.as_ref()),
        Predicate::Minority => scheme.minority.permits(profile.minority.as_ref()),
        Predicate::Disabled => scheme.disabled.permits(profile.disabled.as_ref()),
    }
}

/// Human readable requirement for a failed predicate.
pub(crate) fn describe_failure(
    predicate: Predicate,
    scheme: &SchemeRecord,
    profile: &UserProfile,
) -> String {
    match predicate {
        Predicate::MinimumAge => format!(
            "requires age {} or above (applicant is {})",
            scheme.min_age, profile.age
        ),
        Predicate::Gender => mismatch(
            "gender",
            token_list(&scheme.gender),
            profile.gender.map(|value| value.token()),
        ),
        Predicate::State => mismatch(
            "state",
            text_list(&scheme.states),
            profile.state.as_deref(),
        ),
        Predicate::Occupation => mismatch(
            "occupation",
            text_list(&scheme.occupations),
            profile.occupation.as_deref(),
        ),
        Predicate::Residence => mismatch(
            "residence",
            token_list(&scheme.residence),
            profile.residence.map(|value| value.token()),
        ),
        Predicate::Minority => mismatch(
            "minority status",
            token_list(&scheme.minority),
            profile.minority.map(|value| value.token()),
        ),
        Predicate::Disabled => mismatch(
            "disability status",
            token_list(&scheme.disabled),
            profile.disabled.map(|value| value.token()),
        ),
    }
}

fn mismatch(field: &str, allowed: String, actual: Option<&str>) -> String {
    let allowed = if allowed.is_empty() {
        "a value this catalog does not recognise".to_string()
    } else {
        allowed
    };

    match actual {
        Some(actual) => format!("{field} must be one of {allowed} (applicant: {actual})"),
        None => format!("{field} must be one of {allowed} (not answered)"),
    }
}

fn token_list<T: Vocabulary + Ord>(constraint: &Constraint<T>) -> String {
    constraint
        .allowed()
        .map(|allowed| {
            allowed
                .iter()
                .map(|value| value.token())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn text_list(constraint: &Constraint<String>) -> String {
    constraint
        .allowed()
        .map(|allowed| allowed.iter().map(String::as_str).collect::<Vec<_>>().join(", "))
        .unwrap_or_default()
}
