//! Maps chatbot phrasing onto the canonical answer vocabulary.
//!
//! Lookups are exact and case-sensitive after trimming. Anything not in a
//! table passes through unchanged; empty input becomes `None`.

use std::collections::HashMap;

use super::answers::{ClientVolume, NormalizedAnswers, OrganizationType, RawAnswers, TeamSize};

const ORG_TYPE_PHRASES: &[(&str, &str)] = &[
    ("Insurance Provider / EAS", "Insurance Provider/EAS"),
    ("Mental Health Practitioner – Private Practice", "Private Practice"),
    (
        "Mental Health or Healthcare Provider – Public System",
        "Public Health Provider",
    ),
    (
        "Home Care or Specialized Residential Services",
        "Home Care/Group Home",
    ),
    ("Other", "Home Care/Group Home"),
];

const TEAM_SIZE_PHRASES: &[(&str, &str)] = &[
    ("1 (Solo practice)", "1"),
    ("2–5 providers", "2–5"),
    ("6–15 providers", "6–15"),
    ("16–50 providers", "16–50"),
    ("51+ providers", "51+"),
    ("Not sure yet", "6–15"),
];

const CLIENT_VOLUME_PHRASES: &[(&str, &str)] = &[
    ("Less than 100", "Low"),
    ("100–500", "Medium"),
    ("501–1,000", "High"),
    ("Over 1,000", "Very High"),
];

/// Phrase-to-canonical lookup tables, one per answer field.
#[derive(Debug, Clone, Default)]
pub struct PhraseTables {
    org_type: HashMap<String, String>,
    team_size: HashMap<String, String>,
    client_volume: HashMap<String, String>,
}

impl PhraseTables {
    /// The fixed tables used by the chatbot.
    pub fn standard() -> Self {
        Self {
            org_type: to_map(ORG_TYPE_PHRASES),
            team_size: to_map(TEAM_SIZE_PHRASES),
            client_volume: to_map(CLIENT_VOLUME_PHRASES),
        }
    }
}

fn to_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(phrase, canonical)| (phrase.to_string(), canonical.to_string()))
        .collect()
}

/// Canonicalizes raw survey answers.
#[derive(Debug, Clone)]
pub struct Normalizer {
    tables: PhraseTables,
}

impl Normalizer {
    pub fn new(tables: PhraseTables) -> Self {
        Self { tables }
    }

    pub fn standard() -> Self {
        Self::new(PhraseTables::standard())
    }

    /// Normalizes the three mapped fields of a submission.
    pub fn normalize(&self, raw: &RawAnswers) -> NormalizedAnswers {
        let normalized = NormalizedAnswers {
            org_type: lookup(&self.tables.org_type, &raw.org_type)
                .map(|v| OrganizationType::from_canonical(&v)),
            team_size: lookup(&self.tables.team_size, &raw.team_size)
                .map(|v| TeamSize::from_canonical(&v)),
            client_volume: lookup(&self.tables.client_volume, &raw.client_volume)
                .map(|v| ClientVolume::from_canonical(&v)),
        };

        tracing::debug!(
            org_type = ?normalized.org_type.as_ref().map(|v| v.as_str()),
            team_size = ?normalized.team_size.as_ref().map(|v| v.as_str()),
            client_volume = ?normalized.client_volume.as_ref().map(|v| v.as_str()),
            "Normalized answers"
        );

        normalized
    }
}

fn lookup(table: &HashMap<String, String>, input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        table
            .get(trimmed)
            .cloned()
            .unwrap_or_else(|| trimmed.to_string()),
    )
}
