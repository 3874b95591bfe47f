//! Package catalog: prices, features, alternatives and next steps.
//!
//! The catalog is read-only configuration built once at startup. Building it
//! checks that every package lists at least two features, since the
//! explanation quotes the first two.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::package::{Package, Placement};

/// Per-seat price applied when a placement has no explicit price.
pub const FALLBACK_SEAT_PRICE: u32 = 49;

/// Minimum features a package must list.
pub const MIN_FEATURES: usize = 2;

const STANDARD_PRICES: &[(Package, u32, u32)] = &[
    (Package::FreshStart, 4, 196),
    (Package::PracticePlus, 8, 392),
    (Package::PracticePlus, 6, 294),
    (Package::CommunityAccess, 20, 980),
    (Package::CommunityAccess, 16, 784),
    (Package::EnterpriseCare, 20, 980),
    (Package::EnterpriseAccess, 20, 980),
];

const STANDARD_FEATURES: &[(Package, &[&str])] = &[
    (
        Package::FreshStart,
        &[
            "Self-guided mental health tools",
            "Basic AI self-assessment",
            "1 group session per month",
            "Provider dashboard",
            "Email support",
        ],
    ),
    (
        Package::PracticePlus,
        &[
            "Full AI assessment suite",
            "Customizable group modules",
            "Advanced analytics dashboard",
            "Priority email support",
            "Monthly progress reports",
        ],
    ),
    (
        Package::CommunityAccess,
        &[
            "Multilingual support",
            "Unlimited group sessions",
            "Client monitoring tools",
            "Dedicated account manager",
            "Volume discounts",
        ],
    ),
    (
        Package::EnterpriseCare,
        &[
            "Unlimited users",
            "API integration",
            "Custom reporting",
            "24/7 support",
            "Training sessions",
        ],
    ),
    (
        Package::EnterpriseAccess,
        &[
            "White-label solution",
            "Claims integration",
            "Outcome tracking",
            "Dedicated support team",
            "Custom SLAs",
        ],
    ),
];

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Package '{package}' lists {available} feature(s), at least 2 required")]
    TooFewFeatures { package: Package, available: usize },
}

/// Monthly price per (package, seats) pair.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<Placement, u32>,
}

impl PriceTable {
    pub fn new(entries: impl IntoIterator<Item = (Placement, u32)>) -> Self {
        Self {
            prices: entries.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_PRICES
                .iter()
                .map(|(package, seats, price)| (Placement::new(*package, *seats), *price)),
        )
    }

    /// The listed price, if the placement has one.
    pub fn listed(&self, placement: &Placement) -> Option<u32> {
        self.prices.get(placement).copied()
    }

    /// Listed price, or seats × 49.
    pub fn price_for(&self, placement: &Placement) -> u32 {
        self.listed(placement)
            .unwrap_or_else(|| placement.seats * FALLBACK_SEAT_PRICE)
    }
}

/// Ordered feature descriptions per package.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    features: HashMap<Package, Vec<String>>,
}

impl FeatureTable {
    pub fn new(entries: impl IntoIterator<Item = (Package, Vec<String>)>) -> Self {
        Self {
            features: entries.into_iter().collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_FEATURES.iter().map(|(package, features)| {
            (*package, features.iter().map(|f| f.to_string()).collect())
        }))
    }

    /// Features for a package; empty when the package is not listed.
    pub fn features_for(&self, package: Package) -> &[String] {
        self.features
            .get(&package)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A package offered for comparison next to the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub best_for: String,
    pub price: String,
}

impl Alternative {
    pub fn new(name: &str, best_for: &str, price: &str) -> Self {
        Self {
            name: name.to_string(),
            best_for: best_for.to_string(),
            price: price.to_string(),
        }
    }
}

/// Validated, immutable package catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    prices: PriceTable,
    features: FeatureTable,
    alternatives: Vec<Alternative>,
    next_steps: Vec<String>,
}

impl Catalog {
    /// Builds a catalog, rejecting any package with fewer than two features.
    ///
    /// # Errors
    ///
    /// `CatalogError::TooFewFeatures` naming the first offending package.
    pub fn new(
        prices: PriceTable,
        features: FeatureTable,
        alternatives: Vec<Alternative>,
        next_steps: Vec<String>,
    ) -> Result<Self, CatalogError> {
        for package in Package::ALL {
            let available = features.features_for(package).len();
            if available < MIN_FEATURES {
                return Err(CatalogError::TooFewFeatures { package, available });
            }
        }

        Ok(Self {
            prices,
            features,
            alternatives,
            next_steps,
        })
    }

    /// The fixed catalog sold today.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(
            PriceTable::standard(),
            FeatureTable::standard(),
            vec![
                Alternative::new("Fresh Start", "Small practices (1-5 providers)", "$49/seat"),
                Alternative::new(
                    "Practice Plus",
                    "Growing practices (6-15 providers)",
                    "$49/seat",
                ),
                Alternative::new(
                    "Community Access",
                    "Group practices (16+ providers)",
                    "Volume pricing",
                ),
            ],
            vec![
                "Review the detailed report".to_string(),
                "Compare with alternatives".to_string(),
                "Contact sales for implementation".to_string(),
            ],
        )
    }

    pub fn price_for(&self, placement: &Placement) -> u32 {
        self.prices.price_for(placement)
    }

    pub fn features_for(&self, package: Package) -> &[String] {
        self.features.features_for(package)
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::RuleCascade;

    #[test]
    fn standard_catalog_builds() {
        assert!(Catalog::standard().is_ok());
    }

    #[test]
    fn every_reachable_placement_has_a_listed_price() {
        let prices = PriceTable::standard();
        for placement in RuleCascade::standard().reachable_placements() {
            assert!(
                prices.listed(&placement).is_some(),
                "no listed price for {} x {}",
                placement.package,
                placement.seats
            );
        }
    }

    #[test]
    fn listed_prices_match_the_price_sheet() {
        let prices = PriceTable::standard();
        assert_eq!(prices.price_for(&Placement::new(Package::FreshStart, 4)), 196);
        assert_eq!(prices.price_for(&Placement::new(Package::PracticePlus, 8)), 392);
        assert_eq!(prices.price_for(&Placement::new(Package::PracticePlus, 6)), 294);
        assert_eq!(prices.price_for(&Placement::new(Package::CommunityAccess, 16)), 784);
        assert_eq!(prices.price_for(&Placement::new(Package::CommunityAccess, 20)), 980);
    }

    #[test]
    fn unlisted_placement_uses_per_seat_fallback() {
        let prices = PriceTable::standard();
        assert_eq!(prices.listed(&Placement::new(Package::FreshStart, 10)), None);
        assert_eq!(prices.price_for(&Placement::new(Package::FreshStart, 10)), 490);
    }

    #[test]
    fn features_keep_insertion_order() {
        let features = FeatureTable::standard();
        let fresh = features.features_for(Package::FreshStart);
        assert_eq!(fresh.len(), 5);
        assert_eq!(fresh[0], "Self-guided mental health tools");
        assert_eq!(fresh[1], "Basic AI self-assessment");
    }

    #[test]
    fn missing_package_has_no_features() {
        let features = FeatureTable::default();
        assert!(features.features_for(Package::EnterpriseCare).is_empty());
    }

    #[test]
    fn catalog_rejects_package_with_one_feature() {
        let mut entries: Vec<(Package, Vec<String>)> = Package::ALL
            .into_iter()
            .map(|p| (p, vec!["a".to_string(), "b".to_string()]))
            .collect();
        entries[2].1.truncate(1);

        let result = Catalog::new(
            PriceTable::standard(),
            FeatureTable::new(entries),
            vec![],
            vec![],
        );
        assert_eq!(
            result.unwrap_err(),
            CatalogError::TooFewFeatures {
                package: Package::CommunityAccess,
                available: 1
            }
        );
    }

    #[test]
    fn standard_alternatives_and_next_steps() {
        let catalog = Catalog::standard().unwrap();
        let names: Vec<&str> = catalog.alternatives().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Fresh Start", "Practice Plus", "Community Access"]);
        assert_eq!(catalog.alternatives()[2].price, "Volume pricing");
        assert_eq!(catalog.next_steps().len(), 3);
        assert_eq!(catalog.next_steps()[2], "Contact sales for implementation");
    }
}
