use std::collections::BTreeSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CoreError, Platform};

/// Upper bound of the catalog price slider when nothing else is configured.
pub const DEFAULT_PRICE_CEILING: Decimal = Decimal::ONE_THOUSAND;

/// Ordering applied to the filtered catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Supplier order, untouched.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
    Newest,
    Discount,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::Newest,
        SortKey::Discount,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::Newest => "newest",
            SortKey::Discount => "discount",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownSortKey(s.to_string()))
    }
}

/// Inclusive price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Builds a range, clamping `max` up to `min` when the slider handles cross.
    #[must_use]
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self {
            min,
            max: max.max(min),
        }
    }

    /// `[0, ceiling]`.
    #[must_use]
    pub fn up_to(ceiling: Decimal) -> Self {
        Self::new(Decimal::ZERO, ceiling)
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::up_to(DEFAULT_PRICE_CEILING)
    }
}

/// Every catalog selection the shopper has made.
///
/// Empty platform/category selections mean "no restriction"; each `true`
/// flag narrows the result further.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    pub platforms: BTreeSet<Platform>,
    pub categories: BTreeSet<String>,
    pub price_range: PriceRange,
    pub in_stock_only: bool,
    pub on_sale_only: bool,
    pub featured_only: bool,
    pub new_only: bool,
    pub query: String,
    pub sort: SortKey,
}

impl FilterSet {
    /// Defaults with the price slider spanning `[0, ceiling]`.
    #[must_use]
    pub fn with_ceiling(ceiling: Decimal) -> Self {
        Self {
            price_range: PriceRange::up_to(ceiling),
            ..Self::default()
        }
    }

    /// Clears every selection and reopens the slider to `[0, ceiling]`.
    pub fn reset(&mut self, ceiling: Decimal) {
        *self = Self::with_ceiling(ceiling);
    }

    /// Adds the platform if absent, removes it otherwise.
    pub fn toggle_platform(&mut self, platform: Platform) {
        if !self.platforms.remove(&platform) {
            self.platforms.insert(platform);
        }
    }

    /// Adds the category if absent, removes it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    #[must_use]
    pub fn has_platform(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}
