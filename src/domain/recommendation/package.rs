//! Subscription package definitions.

use serde::{Deserialize, Serialize};

/// One of the five fixed subscription packages.
///
/// Serialized by its display name, which is also the value the dashboard
/// carries in its `package` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Package {
    #[serde(rename = "Fresh Start")]
    FreshStart,

    #[serde(rename = "Practice Plus")]
    PracticePlus,

    #[serde(rename = "Community Access")]
    CommunityAccess,

    #[serde(rename = "Enterprise Care (Public Health)")]
    EnterpriseCare,

    #[serde(rename = "Enterprise Access (Insurance & EAS)")]
    EnterpriseAccess,
}

impl Package {
    /// All packages in catalog order.
    pub const ALL: [Package; 5] = [
        Package::FreshStart,
        Package::PracticePlus,
        Package::CommunityAccess,
        Package::EnterpriseCare,
        Package::EnterpriseAccess,
    ];

    /// Returns the display name for this package.
    pub fn display_name(&self) -> &'static str {
        match self {
            Package::FreshStart => "Fresh Start",
            Package::PracticePlus => "Practice Plus",
            Package::CommunityAccess => "Community Access",
            Package::EnterpriseCare => "Enterprise Care (Public Health)",
            Package::EnterpriseAccess => "Enterprise Access (Insurance & EAS)",
        }
    }

    /// Looks a package up by its exact display name.
    pub fn from_display_name(name: &str) -> Option<Package> {
        Package::ALL.into_iter().find(|p| p.display_name() == name)
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A package together with its seat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub package: Package,
    pub seats: u32,
}

impl Placement {
    pub const fn new(package: Package, seats: u32) -> Self {
        Self { package, seats }
    }
}
