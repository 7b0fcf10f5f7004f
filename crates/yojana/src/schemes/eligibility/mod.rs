//! Boolean eligibility of a profile against one scheme record.
//!
//! A scheme matches when every predicate holds. Predicates are independent of
//! one another; the fixed order only decides which check short-circuits first.

mod rules;

use crate::schemes::domain::{SchemeRecord, UserProfile};
use serde::Serialize;

/// One field-level eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    MinimumAge,
    Gender,
    State,
    Occupation,
    Residence,
    Minority,
    Disabled,
}

impl Predicate {
    /// Evaluation order.
    pub const ALL: [Predicate; 7] = [
        Predicate::MinimumAge,
        Predicate::Gender,
        Predicate::State,
        Predicate::Occupation,
        Predicate::Residence,
        Predicate::Minority,
        Predicate::Disabled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Predicate::MinimumAge => "Minimum age",
            Predicate::Gender => "Gender",
            Predicate::State => "State",
            Predicate::Occupation => "Occupation",
            Predicate::Residence => "Residence",
            Predicate::Minority => "Minority",
            Predicate::Disabled => "Differently abled",
        }
    }

    pub fn holds(&self, scheme: &SchemeRecord, profile: &UserProfile) -> bool {
        rules::holds(*self, scheme, profile)
    }
}

/// Failed predicate with a readable requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ineligibility {
    pub predicate: Predicate,
    pub detail: String,
}

pub fn is_eligible(scheme: &SchemeRecord, profile: &UserProfile) -> bool {
    Predicate::ALL
        .iter()
        .all(|predicate| predicate.holds(scheme, profile))
}

/// Every failing predicate, in evaluation order. Empty iff [`is_eligible`].
pub fn explain(scheme: &SchemeRecord, profile: &UserProfile) -> Vec<Ineligibility> {
    Predicate::ALL
        .iter()
        .filter(|predicate| !predicate.holds(scheme, profile))
        .map(|predicate| Ineligibility {
            predicate: *predicate,
            detail: rules::describe_failure(*predicate, scheme, profile),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemes::domain::{Gender, Residence, SchemeType, YesNo};

    fn bihar_farmer() -> UserProfile {
        UserProfile {
            age: 25,
            gender: Some(Gender::Male),
            state: Some("Bihar".to_string()),
            occupation: Some("Farmer".to_string()),
            residence: Some(Residence::Rural),
            minority: Some(YesNo::No),
            disabled: Some(YesNo::No),
            caste: None,
            salary: None,
        }
    }

    fn farmer_scheme() -> SchemeRecord {
        SchemeRecord::new("PM-KISAN", "Income support", SchemeType::Central)
            .with_min_age(18)
            .with_occupations(["Farmer", "Daily Wage Worker"])
    }

    #[test]
    fn unconstrained_scheme_admits_anyone_over_age_floor() {
        let scheme = SchemeRecord::new("Open", "", SchemeType::State).with_min_age(10);
        let profile = UserProfile {
            age: 10,
            ..UserProfile::default()
        };
        assert!(is_eligible(&scheme, &profile));
    }

    #[test]
    fn age_floor_is_inclusive_and_dominant() {
        let scheme = farmer_scheme();
        let mut profile = bihar_farmer();

        profile.age = 18;
        assert!(is_eligible(&scheme, &profile));

        profile.age = 15;
        assert!(!is_eligible(&scheme, &profile));
        let gaps = explain(&scheme, &profile);
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].predicate, Predicate::MinimumAge);
        assert!(gaps[0].detail.contains("18"));
    }

    #[test]
    fn farmer_matches_central_occupation_scheme() {
        assert!(is_eligible(&farmer_scheme(), &bihar_farmer()));
    }

    #[test]
    fn state_outside_allowed_set_is_rejected() {
        let scheme = farmer_scheme().with_states(["Kerala", "Tamil Nadu"]);
        let gaps = explain(&scheme, &bihar_farmer());

        assert!(!is_eligible(&scheme, &bihar_farmer()));
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].predicate, Predicate::State);
        assert!(gaps[0].detail.contains("Kerala, Tamil Nadu"));
        assert!(gaps[0].detail.contains("Bihar"));
    }

    #[test]
    fn missing_answer_fails_active_constraint_only() {
        let mut profile = bihar_farmer();
        profile.disabled = None;

        let open = farmer_scheme();
        assert!(is_eligible(&open, &profile));

        let restricted = farmer_scheme().with_disabled(YesNo::Yes);
        let gaps = explain(&restricted, &profile);
        assert_eq!(gaps[0].predicate, Predicate::Disabled);
        assert!(gaps[0].detail.contains("not answered"));
    }

    #[test]
    fn exact_match_fields_compare_tokens() {
        let profile = bihar_farmer();

        assert!(!is_eligible(
            &farmer_scheme().with_gender(Gender::Female),
            &profile
        ));
        assert!(!is_eligible(
            &farmer_scheme().with_residence(Residence::Urban),
            &profile
        ));
        assert!(!is_eligible(
            &farmer_scheme().with_minority(YesNo::Yes),
            &profile
        ));
        assert!(is_eligible(
            &farmer_scheme()
                .with_gender(Gender::Male)
                .with_residence(Residence::Rural)
                .with_minority(YesNo::No)
                .with_disabled(YesNo::No),
            &profile
        ));
    }

    #[test]
    fn explain_lists_every_failure_in_order() {
        let scheme = farmer_scheme()
            .with_min_age(60)
            .with_gender(Gender::Female)
            .with_states(["Goa"]);

        let predicates: Vec<_> = explain(&scheme, &bihar_farmer())
            .into_iter()
            .map(|gap| gap.predicate)
            .collect();

        assert_eq!(
            predicates,
            vec![Predicate::MinimumAge, Predicate::Gender, Predicate::State]
        );
    }

    #[test]
    fn predicate_order_does_not_change_result() {
        let schemes = [
            farmer_scheme(),
            farmer_scheme().with_states(["Goa"]),
            farmer_scheme().with_min_age(30).with_gender(Gender::Other),
            SchemeRecord::new("Open", "", SchemeType::State),
        ];
        let profile = bihar_farmer();

        for scheme in &schemes {
            let expected = is_eligible(scheme, &profile);
            let mut order = Predicate::ALL;
            for shift in 0..order.len() {
                order.rotate_left(1);
                let reversed = order.iter().rev().all(|p| p.holds(scheme, &profile));
                let rotated = order.iter().all(|p| p.holds(scheme, &profile));
                assert_eq!(rotated, expected, "rotation {shift}");
                assert_eq!(reversed, expected, "reversed rotation {shift}");
            }
        }
    }
}
