use super::domain::{SchemeRecord, UserProfile};
use super::eligibility::is_eligible;
use serde::Serialize;

/// One of the three result groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeBucket {
    All,
    Central,
    State,
}

impl SchemeBucket {
    pub fn title(&self) -> &'static str {
        match self {
            SchemeBucket::All => "All Schemes",
            SchemeBucket::Central => "Central Schemes",
            SchemeBucket::State => "State Schemes",
        }
    }
}

/// Matched schemes in catalog order. Every entry of `all` is in exactly one of
/// `central` or `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedSchemes<'c> {
    pub all: Vec<&'c SchemeRecord>,
    pub central: Vec<&'c SchemeRecord>,
    pub state: Vec<&'c SchemeRecord>,
}

impl<'c> CategorizedSchemes<'c> {
    pub fn bucket(&self, bucket: SchemeBucket) -> &[&'c SchemeRecord] {
        match bucket {
            SchemeBucket::All => &self.all,
            SchemeBucket::Central => &self.central,
            SchemeBucket::State => &self.state,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Single stable pass over the catalog.
pub fn categorize<'c, I>(catalog: I, profile: &UserProfile) -> CategorizedSchemes<'c>
where
    I: IntoIterator<Item = &'c SchemeRecord>,
{
    let mut buckets = CategorizedSchemes::default();

    for scheme in catalog {
        if !is_eligible(scheme, profile) {
            continue;
        }

        buckets.all.push(scheme);
        if scheme.is_central() {
            buckets.central.push(scheme);
        } else {
            buckets.state.push(scheme);
        }
    }

    buckets
}
