//! Package selection as an ordered decision table.
//!
//! Each rule pairs a predicate with the placement it produces. Rules are
//! evaluated top to bottom and the first match wins. A cascade always carries
//! a catch-all placement, so evaluation is total.
//!
//! # Standard Cascade
//!
//! | # | Rule | Placement |
//! |---|------|-----------|
//! | 1 | specialization mentions "trauma" | Practice Plus, 8 |
//! | 2 | client volume is Very High | Enterprise Care (Public Health), 20 |
//! | 3 | group service model and 16+ providers | Community Access, 20 |
//! | 4 | Private Practice, 1 or 2–5 | Fresh Start, 4 |
//! | 5 | Private Practice, 6–15 | Practice Plus, 8 |
//! | 6 | Private Practice, 16–50 | Community Access, 16 |
//! | 7 | Private Practice, any other size | Community Access, 20 |
//! | 8 | Public Health Provider, up to 15 | Practice Plus, 6 |
//! | 9 | Public Health Provider, any other size | Enterprise Care (Public Health), 20 |
//! | 10 | Insurance Provider/EAS | Enterprise Access (Insurance & EAS), 20 |
//! | 11 | 1 or 2–5 | Fresh Start, 4 |
//! | 12 | 6–15 | Practice Plus, 8 |
//! | 13 | 16–50 | Community Access, 16 |
//! | - | anything else | Community Access, 20 |

use super::answers::{ClientVolume, OrganizationType, RawAnswers, TeamSize};
use super::errors::RecommendationError;
use super::normalizer::Normalizer;
use super::package::{Package, Placement};

/// The facts a rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub org_type: &'a OrganizationType,
    pub team_size: &'a TeamSize,
    pub client_volume: Option<&'a ClientVolume>,
    pub specialization: Option<&'a str>,
    pub service_model: Option<&'a str>,
}

impl Subject<'_> {
    fn specialization_mentions(&self, needle: &str) -> bool {
        contains_ignore_case(self.specialization, needle)
    }

    fn service_model_mentions(&self, needle: &str) -> bool {
        contains_ignore_case(self.service_model, needle)
    }
}

fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(needle))
        .unwrap_or(false)
}

/// A single row of the decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub placement: Placement,
    predicate: fn(&Subject<'_>) -> bool,
}

impl Rule {
    pub const fn new(
        name: &'static str,
        predicate: fn(&Subject<'_>) -> bool,
        placement: Placement,
    ) -> Self {
        Self {
            name,
            placement,
            predicate,
        }
    }

    pub fn matches(&self, subject: &Subject<'_>) -> bool {
        (self.predicate)(subject)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

/// The rule that fired and what it chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch {
    pub rule: &'static str,
    pub placement: Placement,
}

/// Name reported when no listed rule matches.
pub const CATCH_ALL_RULE: &str = "fallback_any_size";

/// Ordered list of rules plus a catch-all placement.
#[derive(Debug, Clone)]
pub struct RuleCascade {
    rules: Vec<Rule>,
    catch_all: Placement,
}

impl RuleCascade {
    pub fn new(rules: Vec<Rule>, catch_all: Placement) -> Self {
        Self { rules, catch_all }
    }

    /// The fixed cascade used in production.
    pub fn standard() -> Self {
        use Package::*;

        let rules = vec![
            Rule::new(
                "trauma_specialization",
                |s| s.specialization_mentions("trauma"),
                Placement::new(PracticePlus, 8),
            ),
            Rule::new(
                "very_high_client_volume",
                |s| matches!(s.client_volume, Some(ClientVolume::VeryHigh)),
                Placement::new(EnterpriseCare, 20),
            ),
            Rule::new(
                "group_service_large_team",
                |s| s.service_model_mentions("group") && s.team_size.is_sixteen_plus(),
                Placement::new(CommunityAccess, 20),
            ),
            Rule::new(
                "private_practice_up_to_five",
                |s| is_private_practice(s) && s.team_size.is_up_to_five(),
                Placement::new(FreshStart, 4),
            ),
            Rule::new(
                "private_practice_six_to_fifteen",
                |s| is_private_practice(s) && *s.team_size == TeamSize::Medium,
                Placement::new(PracticePlus, 8),
            ),
            Rule::new(
                "private_practice_sixteen_to_fifty",
                |s| is_private_practice(s) && *s.team_size == TeamSize::Large,
                Placement::new(CommunityAccess, 16),
            ),
            Rule::new(
                "private_practice_other_size",
                is_private_practice,
                Placement::new(CommunityAccess, 20),
            ),
            Rule::new(
                "public_health_up_to_fifteen",
                |s| {
                    is_public_health(s)
                        && (s.team_size.is_up_to_five() || *s.team_size == TeamSize::Medium)
                },
                Placement::new(PracticePlus, 6),
            ),
            Rule::new(
                "public_health_other_size",
                is_public_health,
                Placement::new(EnterpriseCare, 20),
            ),
            Rule::new(
                "insurance_provider",
                |s| *s.org_type == OrganizationType::InsuranceProvider,
                Placement::new(EnterpriseAccess, 20),
            ),
            Rule::new(
                "fallback_up_to_five",
                |s| s.team_size.is_up_to_five(),
                Placement::new(FreshStart, 4),
            ),
            Rule::new(
                "fallback_six_to_fifteen",
                |s| *s.team_size == TeamSize::Medium,
                Placement::new(PracticePlus, 8),
            ),
            Rule::new(
                "fallback_sixteen_to_fifty",
                |s| *s.team_size == TeamSize::Large,
                Placement::new(CommunityAccess, 16),
            ),
        ];

        Self::new(rules, Placement::new(CommunityAccess, 20))
    }

    /// Every placement this cascade can produce, catch-all included.
    pub fn reachable_placements(&self) -> Vec<Placement> {
        let mut placements: Vec<Placement> = Vec::new();
        for placement in self
            .rules
            .iter()
            .map(|r| r.placement)
            .chain(std::iter::once(self.catch_all))
        {
            if !placements.contains(&placement) {
                placements.push(placement);
            }
        }
        placements
    }

    /// Returns the first matching rule, or the catch-all.
    pub fn evaluate(&self, subject: &Subject<'_>) -> RuleMatch {
        self.rules
            .iter()
            .find(|rule| rule.matches(subject))
            .map(|rule| RuleMatch {
                rule: rule.name,
                placement: rule.placement,
            })
            .unwrap_or(RuleMatch {
                rule: CATCH_ALL_RULE,
                placement: self.catch_all,
            })
    }
}

fn is_private_practice(s: &Subject<'_>) -> bool {
    *s.org_type == OrganizationType::PrivatePractice
}

fn is_public_health(s: &Subject<'_>) -> bool {
    *s.org_type == OrganizationType::PublicHealthProvider
}

/// Normalizes answers and runs them through the cascade.
#[derive(Debug, Clone)]
pub struct Recommender {
    normalizer: Normalizer,
    cascade: RuleCascade,
}

impl Recommender {
    pub fn new(normalizer: Normalizer, cascade: RuleCascade) -> Self {
        Self {
            normalizer,
            cascade,
        }
    }

    pub fn standard() -> Self {
        Self::new(Normalizer::standard(), RuleCascade::standard())
    }

    /// Chooses a package and seat count for the submitted answers.
    ///
    /// # Errors
    ///
    /// `InvalidMapping` when the organization type or team size is empty.
    pub fn recommend(&self, raw: &RawAnswers) -> Result<RuleMatch, RecommendationError> {
        let normalized = self.normalizer.normalize(raw);

        let (org_type, team_size) = match (&normalized.org_type, &normalized.team_size) {
            (Some(org_type), Some(team_size)) => (org_type, team_size),
            _ => return Err(RecommendationError::invalid_mapping()),
        };

        let subject = Subject {
            org_type,
            team_size,
            client_volume: normalized.client_volume.as_ref(),
            specialization: raw.specialization.as_deref(),
            service_model: raw.service_model.as_deref(),
        };

        Ok(self.cascade.evaluate(&subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn recommend(raw: RawAnswers) -> RuleMatch {
        Recommender::standard().recommend(&raw).unwrap()
    }

    fn placement(raw: RawAnswers) -> (Package, u32) {
        let m = recommend(raw);
        (m.placement.package, m.placement.seats)
    }

    const ORG_TYPES: [&str; 5] = [
        "Insurance Provider/EAS",
        "Private Practice",
        "Public Health Provider",
        "Home Care/Group Home",
        "Veterinary clinic",
    ];

    const TEAM_SIZES: [&str; 6] = ["1", "2–5", "6–15", "16–50", "51+", "a few"];

    const VOLUMES: [&str; 5] = ["", "Low", "Medium", "High", "Very High"];

    const SPECIALIZATIONS: [Option<&str>; 3] = [None, Some("Anxiety"), Some("Trauma care")];

    const SERVICE_MODELS: [Option<&str>; 3] = [None, Some("Individual"), Some("Group sessions")];

    /// Reference decision written as plain conditionals.
    fn expected(
        org: &str,
        team: &str,
        volume: &str,
        trauma: bool,
        group: bool,
    ) -> (Package, u32) {
        use Package::*;
        let small = team == "1" || team == "2–5";
        if trauma {
            return (PracticePlus, 8);
        }
        if volume == "Very High" {
            return (EnterpriseCare, 20);
        }
        if group && (team == "16–50" || team == "51+") {
            return (CommunityAccess, 20);
        }
        match org {
            "Private Practice" => {
                return if small {
                    (FreshStart, 4)
                } else if team == "6–15" {
                    (PracticePlus, 8)
                } else if team == "16–50" {
                    (CommunityAccess, 16)
                } else {
                    (CommunityAccess, 20)
                };
            }
            "Public Health Provider" => {
                return if small || team == "6–15" {
                    (PracticePlus, 6)
                } else {
                    (EnterpriseCare, 20)
                };
            }
            "Insurance Provider/EAS" => return (EnterpriseAccess, 20),
            _ => {}
        }
        if small {
            (FreshStart, 4)
        } else if team == "6–15" {
            (PracticePlus, 8)
        } else if team == "16–50" {
            (CommunityAccess, 16)
        } else {
            (CommunityAccess, 20)
        }
    }

    #[test]
    fn cascade_matches_reference_over_full_grid() {
        for org in ORG_TYPES {
            for team in TEAM_SIZES {
                for volume in VOLUMES {
                    for specialization in SPECIALIZATIONS {
                        for service_model in SERVICE_MODELS {
                            let mut raw = RawAnswers::new(org, team, volume);
                            raw.specialization = specialization.map(String::from);
                            raw.service_model = service_model.map(String::from);

                            let trauma = specialization == Some("Trauma care");
                            let group = service_model == Some("Group sessions");
                            assert_eq!(
                                placement(raw),
                                expected(org, team, volume, trauma, group),
                                "org={org} team={team} volume={volume} \
                                 specialization={specialization:?} service_model={service_model:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn trauma_overrides_very_high_volume() {
        let m = recommend(
            RawAnswers::new("Insurance Provider / EAS", "51+ providers", "Over 1,000")
                .with_specialization("Trauma-informed care"),
        );
        assert_eq!(m.rule, "trauma_specialization");
        assert_eq!(m.placement, Placement::new(Package::PracticePlus, 8));
    }

    #[test]
    fn trauma_match_is_case_insensitive() {
        let m = recommend(
            RawAnswers::new("Other", "1", "").with_specialization("complex TRAUMA recovery"),
        );
        assert_eq!(m.rule, "trauma_specialization");
    }

    #[test]
    fn very_high_volume_wins_for_any_org() {
        for org in ORG_TYPES {
            let m = recommend(RawAnswers::new(org, "1 (Solo practice)", "Over 1,000"));
            assert_eq!(m.rule, "very_high_client_volume", "{org}");
            assert_eq!(m.placement, Placement::new(Package::EnterpriseCare, 20));
        }
    }

    #[test]
    fn group_rule_needs_sixteen_or_more() {
        let small = recommend(
            RawAnswers::new("Private Practice", "6–15", "").with_service_model("GROUP work"),
        );
        assert_eq!(small.rule, "private_practice_six_to_fifteen");

        let large = recommend(
            RawAnswers::new("Private Practice", "16–50", "").with_service_model("GROUP work"),
        );
        assert_eq!(large.rule, "group_service_large_team");
        assert_eq!(large.placement, Placement::new(Package::CommunityAccess, 20));
    }

    #[test]
    fn other_with_fifty_one_plus_falls_through_to_catch_all() {
        let m = recommend(RawAnswers::new("Other", "51+ providers", ""));
        assert_eq!(m.rule, CATCH_ALL_RULE);
        assert_eq!(m.placement, Placement::new(Package::CommunityAccess, 20));
    }

    #[test]
    fn private_practice_fifty_one_plus_uses_else_branch() {
        let m = recommend(RawAnswers::new("Private Practice", "51+", ""));
        assert_eq!(m.rule, "private_practice_other_size");
        assert_eq!(m.placement, Placement::new(Package::CommunityAccess, 20));
    }

    #[test]
    fn unrecognized_team_size_for_public_health_is_enterprise() {
        let m = recommend(RawAnswers::new("Public Health Provider", "dozens", ""));
        assert_eq!(m.rule, "public_health_other_size");
    }

    #[test]
    fn missing_required_answers_are_invalid_mapping() {
        let recommender = Recommender::standard();
        for raw in [
            RawAnswers::new("", "1", "Low"),
            RawAnswers::new("Other", "", "Low"),
            RawAnswers::new("   ", "  ", ""),
        ] {
            assert_eq!(
                recommender.recommend(&raw),
                Err(RecommendationError::InvalidMapping)
            );
        }
    }

    #[test]
    fn missing_client_volume_is_allowed() {
        let m = recommend(RawAnswers::new("Private Practice", "1", ""));
        assert_eq!(m.placement, Placement::new(Package::FreshStart, 4));
    }

    #[test]
    fn reachable_placements_are_deduplicated() {
        let placements = RuleCascade::standard().reachable_placements();
        assert_eq!(placements.len(), 7);
        assert!(placements.contains(&Placement::new(Package::PracticePlus, 6)));
    }

    #[test]
    fn empty_cascade_returns_catch_all() {
        let cascade = RuleCascade::new(vec![], Placement::new(Package::FreshStart, 4));
        let org = OrganizationType::PrivatePractice;
        let team = TeamSize::Solo;
        let m = cascade.evaluate(&Subject {
            org_type: &org,
            team_size: &team,
            client_volume: None,
            specialization: None,
            service_model: None,
        });
        assert_eq!(m.rule, CATCH_ALL_RULE);
    }

    fn arb_optional_text() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[a-zA-Z ]{0,24}")
    }

    proptest! {
        #[test]
        fn recommend_is_idempotent(
            org in prop::sample::select(ORG_TYPES.to_vec()),
            team in prop::sample::select(TEAM_SIZES.to_vec()),
            volume in prop::sample::select(VOLUMES.to_vec()),
            specialization in arb_optional_text(),
            service_model in arb_optional_text(),
        ) {
            let mut raw = RawAnswers::new(org, team, volume);
            raw.specialization = specialization;
            raw.service_model = service_model;

            let recommender = Recommender::standard();
            let first = recommender.recommend(&raw);
            let second = recommender.recommend(&raw);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn recommend_is_total_for_non_empty_answers(
            org in "[A-Za-z0-9+/–]{1,16}",
            team in "[A-Za-z0-9+/–]{1,16}",
            volume in "[A-Za-z0-9 ,]{0,16}",
        ) {
            let raw = RawAnswers::new(org, team, volume);
            let m = Recommender::standard().recommend(&raw);
            prop_assert!(m.is_ok());
            let placements = RuleCascade::standard().reachable_placements();
            prop_assert!(placements.contains(&m.unwrap().placement));
        }
    }
}
