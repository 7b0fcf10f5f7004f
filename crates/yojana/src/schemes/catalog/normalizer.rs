use std::collections::BTreeSet;

use tracing::warn;

use crate::schemes::domain::Constraint;
use crate::schemes::vocabulary::Vocabulary;

/// Reserved values meaning "no restriction" in the tabular export.
const SENTINELS: &[&str] = &["any", "all"];

pub(crate) fn is_sentinel(value: &str) -> bool {
    let trimmed = value.trim();
    SENTINELS
        .iter()
        .any(|sentinel| trimmed.eq_ignore_ascii_case(sentinel))
}

/// Split a comma separated cell into trimmed, non-empty entries.
pub(crate) fn split_set(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Missing, blank, and sentinel cells are unconstrained.
pub(crate) fn set_constraint(raw: Option<&str>) -> Constraint<String> {
    match raw {
        Some(value) if !value.trim().is_empty() && !is_sentinel(value) => {
            Constraint::Constrained(split_set(value))
        }
        _ => Constraint::Unconstrained,
    }
}

/// Exact-match cell holding a single vocabulary token.
///
/// An unrecognized token yields an empty allow-list so the rule is never satisfied.
pub(crate) fn token_constraint<T>(raw: Option<&str>, scheme: &str) -> Constraint<T>
where
    T: Vocabulary + Ord,
{
    match raw {
        Some(value) if !value.trim().is_empty() && !is_sentinel(value) => {
            match T::parse_token(value) {
                Ok(token) => Constraint::only(token),
                Err(err) => {
                    warn!(scheme, error = %err, "scheme rule uses unknown value; nobody will match it");
                    Constraint::Constrained(BTreeSet::new())
                }
            }
        }
        _ => Constraint::Unconstrained,
    }
}

pub(crate) fn parse_min_age(raw: Option<&str>, scheme: &str) -> u32 {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return 0;
    };

    value.parse::<u32>().unwrap_or_else(|_| {
        warn!(scheme, value, "unparsable min_age treated as 0");
        0
    })
}
