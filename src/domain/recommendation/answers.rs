//! Survey answer value objects.
//!
//! `RawAnswers` holds the text exactly as the caller sent it. The normalizer
//! turns it into `NormalizedAnswers`, whose fields use the closed vocabularies
//! below. Text outside a vocabulary is kept verbatim in an `Unrecognized`
//! variant so the rule cascade can still apply its fallback branch.

use std::fmt;

/// Survey answers as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnswers {
    pub org_type: String,
    pub team_size: String,
    pub client_volume: String,
    pub service_model: Option<String>,
    pub specialization: Option<String>,
}

impl RawAnswers {
    pub fn new(
        org_type: impl Into<String>,
        team_size: impl Into<String>,
        client_volume: impl Into<String>,
    ) -> Self {
        Self {
            org_type: org_type.into(),
            team_size: team_size.into(),
            client_volume: client_volume.into(),
            service_model: None,
            specialization: None,
        }
    }

    pub fn with_service_model(mut self, service_model: impl Into<String>) -> Self {
        self.service_model = Some(service_model.into());
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }
}

/// Canonical organization type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrganizationType {
    InsuranceProvider,
    PrivatePractice,
    PublicHealthProvider,
    HomeCare,
    Unrecognized(String),
}

impl OrganizationType {
    /// Classifies an already-normalized value.
    pub fn from_canonical(value: &str) -> Self {
        match value {
            "Insurance Provider/EAS" => OrganizationType::InsuranceProvider,
            "Private Practice" => OrganizationType::PrivatePractice,
            "Public Health Provider" => OrganizationType::PublicHealthProvider,
            "Home Care/Group Home" => OrganizationType::HomeCare,
            other => OrganizationType::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            OrganizationType::InsuranceProvider => "Insurance Provider/EAS",
            OrganizationType::PrivatePractice => "Private Practice",
            OrganizationType::PublicHealthProvider => "Public Health Provider",
            OrganizationType::HomeCare => "Home Care/Group Home",
            OrganizationType::Unrecognized(value) => value,
        }
    }
}

/// Canonical team size bracket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TeamSize {
    /// "1"
    Solo,
    /// "2–5"
    Small,
    /// "6–15"
    Medium,
    /// "16–50"
    Large,
    /// "51+"
    VeryLarge,
    Unrecognized(String),
}

impl TeamSize {
    pub fn from_canonical(value: &str) -> Self {
        match value {
            "1" => TeamSize::Solo,
            "2–5" => TeamSize::Small,
            "6–15" => TeamSize::Medium,
            "16–50" => TeamSize::Large,
            "51+" => TeamSize::VeryLarge,
            other => TeamSize::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TeamSize::Solo => "1",
            TeamSize::Small => "2–5",
            TeamSize::Medium => "6–15",
            TeamSize::Large => "16–50",
            TeamSize::VeryLarge => "51+",
            TeamSize::Unrecognized(value) => value,
        }
    }

    /// True for "1" and "2–5".
    pub fn is_up_to_five(&self) -> bool {
        matches!(self, TeamSize::Solo | TeamSize::Small)
    }

    /// True for "16–50" and "51+".
    pub fn is_sixteen_plus(&self) -> bool {
        matches!(self, TeamSize::Large | TeamSize::VeryLarge)
    }
}

/// Canonical monthly client volume.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClientVolume {
    Low,
    Medium,
    High,
    VeryHigh,
    Unrecognized(String),
}

impl ClientVolume {
    pub fn from_canonical(value: &str) -> Self {
        match value {
            "Low" => ClientVolume::Low,
            "Medium" => ClientVolume::Medium,
            "High" => ClientVolume::High,
            "Very High" => ClientVolume::VeryHigh,
            other => ClientVolume::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ClientVolume::Low => "Low",
            ClientVolume::Medium => "Medium",
            ClientVolume::High => "High",
            ClientVolume::VeryHigh => "Very High",
            ClientVolume::Unrecognized(value) => value,
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(OrganizationType, TeamSize, ClientVolume);

/// Answers after normalization. `None` means the input was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAnswers {
    pub org_type: Option<OrganizationType>,
    pub team_size: Option<TeamSize>,
    pub client_volume: Option<ClientVolume>,
}
