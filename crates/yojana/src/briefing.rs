//! Per-scheme briefings.
//!
//! A [`BriefingRequest`] carries the prompt that a language-model backend would
//! receive. [`EligibilityDigest`] answers it offline from the catalog record.

use crate::presentation::{translate_or_original, Locale, Translator};
use crate::schemes::vocabulary::Vocabulary;
use crate::schemes::{explain, Ineligibility, SchemeName, SchemeRecord, UserProfile};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BriefingRequest {
    pub scheme: SchemeName,
    pub locale: Locale,
    pub prompt: String,
    pub gaps: Vec<Ineligibility>,
}

impl BriefingRequest {
    pub fn new(scheme: &SchemeRecord, profile: &UserProfile, locale: &Locale) -> Self {
        Self {
            scheme: scheme.name.clone(),
            locale: locale.clone(),
            prompt: compose_prompt(scheme, profile, locale),
            gaps: explain(scheme, profile),
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.gaps.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Briefing {
    pub scheme: SchemeName,
    pub locale: Locale,
    pub eligible: bool,
    pub text: String,
}

pub trait BriefingService: Send + Sync {
    fn brief(
        &self,
        scheme: &SchemeRecord,
        request: &BriefingRequest,
    ) -> Result<Briefing, BriefingError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BriefingError {
    #[error("briefing backend unavailable: {0}")]
    Unavailable(String),
    #[error("briefing backend returned an empty answer for '{0}'")]
    Empty(SchemeName),
}

fn compose_prompt(scheme: &SchemeRecord, profile: &UserProfile, locale: &Locale) -> String {
    let mut prompt = format!(
        "Explain the {} government scheme \"{}\" to a citizen in simple language (language code: {}).\n",
        scheme.scheme_type.label().to_lowercase(),
        scheme.name,
        locale
    );
    let _ = writeln!(prompt, "Scheme summary: {}", scheme.description);
    let _ = writeln!(prompt, "Applicant: {}", describe_profile(profile));
    prompt.push_str(
        "Cover the benefits, who is eligible, the documents usually required and how to apply",
    );
    let _ = write!(prompt, " via {}.", scheme.website_or_default());
    prompt
}

fn describe_profile(profile: &UserProfile) -> String {
    let answer = |value: Option<&str>| value.unwrap_or("not answered").to_string();

    format!(
        "age {}, gender {}, state {}, occupation {}, residence {}, minority {}, differently abled {}",
        profile.age,
        answer(profile.gender.map(|value| value.token())),
        answer(profile.state.as_deref()),
        answer(profile.occupation.as_deref()),
        answer(profile.residence.map(|value| value.token())),
        answer(profile.minority.map(|value| value.token())),
        answer(profile.disabled.map(|value| value.token())),
    )
}

/// Deterministic briefing assembled from the record and the eligibility gaps.
pub struct EligibilityDigest<T: ?Sized> {
    translator: Arc<T>,
}

impl<T: Translator + ?Sized> EligibilityDigest<T> {
    pub fn new(translator: Arc<T>) -> Self {
        Self { translator }
    }

    fn render(&self, scheme: &SchemeRecord, request: &BriefingRequest) -> String {
        let mut lines = vec![format!(
            "{} ({} scheme)",
            scheme.name,
            scheme.scheme_type.label()
        )];

        if !scheme.description.trim().is_empty() {
            lines.push(scheme.description.clone());
        }

        if scheme.min_age > 0 {
            lines.push(format!("Open to applicants aged {} and above.", scheme.min_age));
        }

        if request.is_eligible() {
            lines.push("Your answers meet every eligibility rule for this scheme.".to_string());
        } else {
            lines.push("Your answers do not meet these rules:".to_string());
            lines.extend(
                request
                    .gaps
                    .iter()
                    .map(|gap| format!("- {}: {}", gap.predicate.label(), gap.detail)),
            );
        }

        lines.push(format!("Apply at {}", scheme.website_or_default()));

        lines
            .iter()
            .map(|line| translate_or_original(&*self.translator, line, &request.locale))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: Translator + ?Sized> BriefingService for EligibilityDigest<T> {
    fn brief(
        &self,
        scheme: &SchemeRecord,
        request: &BriefingRequest,
    ) -> Result<Briefing, BriefingError> {
        let text = self.render(scheme, request);
        if text.trim().is_empty() {
            return Err(BriefingError::Empty(scheme.name.clone()));
        }

        Ok(Briefing {
            scheme: scheme.name.clone(),
            locale: request.locale.clone(),
            eligible: request.is_eligible(),
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::IdentityTranslator;
    use crate::schemes::{Gender, Predicate, SchemeType};

    fn scheme() -> SchemeRecord {
        SchemeRecord::new("Kanyashree", "Scholarship for girls", SchemeType::State)
            .with_min_age(13)
            .with_gender(Gender::Female)
            .with_states(["West Bengal"])
    }

    fn applicant() -> UserProfile {
        UserProfile {
            age: 16,
            gender: Some(Gender::Female),
            state: Some("West Bengal".to_string()),
            ..UserProfile::default()
        }
    }

    #[test]
    fn prompt_mentions_scheme_profile_and_portal() {
        let request = BriefingRequest::new(&scheme(), &applicant(), &Locale::new("bn"));

        assert!(request.prompt.contains("\"Kanyashree\""));
        assert!(request.prompt.contains("language code: bn"));
        assert!(request.prompt.contains("state West Bengal"));
        assert!(request.prompt.contains("occupation not answered"));
        assert!(request.prompt.contains("https://www.myscheme.gov.in"));
        assert!(request.is_eligible());
    }

    #[test]
    fn digest_lists_failed_rules() {
        let mut profile = applicant();
        profile.state = Some("Assam".to_string());
        let request = BriefingRequest::new(&scheme(), &profile, &Locale::english());
        let digest = EligibilityDigest::new(Arc::new(IdentityTranslator));

        let briefing = digest.brief(&scheme(), &request).expect("briefing");

        assert!(!briefing.eligible);
        assert_eq!(request.gaps[0].predicate, Predicate::State);
        assert!(briefing.text.contains("- State: state must be one of West Bengal"));
        assert!(briefing.text.starts_with("Kanyashree (State scheme)"));
        assert!(briefing.text.contains("aged 13 and above"));
    }

    #[test]
    fn digest_falls_back_to_english_when_untranslatable() {
        let request = BriefingRequest::new(&scheme(), &applicant(), &Locale::new("ta"));
        let digest = EligibilityDigest::new(Arc::new(IdentityTranslator));

        let briefing = digest.brief(&scheme(), &request).expect("briefing");

        assert!(briefing.eligible);
        assert!(briefing.text.contains("meet every eligibility rule"));
        assert_eq!(briefing.locale.code(), "ta");
    }
}
