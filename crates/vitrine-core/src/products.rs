use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Console family (or accessory bucket) a product is sold for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ps5,
    Ps4,
    Ps3,
    Ps2,
    Xbox,
    Nintendo,
    Acessorio,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Ps5,
        Platform::Ps4,
        Platform::Ps3,
        Platform::Ps2,
        Platform::Xbox,
        Platform::Nintendo,
        Platform::Acessorio,
    ];

    /// Lowercase wire/display form, e.g. `"ps5"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ps5 => "ps5",
            Platform::Ps4 => "ps4",
            Platform::Ps3 => "ps3",
            Platform::Ps2 => "ps2",
            Platform::Xbox => "xbox",
            Platform::Nintendo => "nintendo",
            Platform::Acessorio => "acessorio",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| CoreError::UnknownPlatform(s.to_string()))
    }
}

/// A catalog entry as supplied by the data source.
///
/// The rules engine only reads products; `stock_quantity` is the single field
/// kept in sync by stock adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    /// Long-form copy, searched by the admin product list.
    #[serde(default)]
    pub description: Option<String>,
    pub price: Decimal,
    /// Price before the current discount. When present it is `>= price`.
    #[serde(default)]
    pub original_price: Option<Decimal>,
    pub platform: Platform,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub stock_quantity: u32,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Fraction of the original price taken off, `(original - price) / original`.
    ///
    /// Zero when there is no original price or it is not positive.
    #[must_use]
    pub fn discount_ratio(&self) -> Decimal {
        match self.original_price {
            Some(original) if original > Decimal::ZERO => (original - self.price) / original,
            _ => Decimal::ZERO,
        }
    }

    /// Whole-number discount shown on the product badge (`-15%`).
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        (self.discount_ratio() * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(price: Decimal, original_price: Option<Decimal>) -> Product {
        Product {
            id: "prod-001".to_string(),
            title: "God of War Ragnarök".to_string(),
            description: None,
            price,
            original_price,
            platform: Platform::Ps5,
            category: "Jogos".to_string(),
            image: None,
            is_new: false,
            is_on_sale: original_price.is_some(),
            featured: true,
            in_stock: true,
            stock_quantity: 15,
        }
    }

    #[test]
    fn platform_parses_case_insensitively() {
        assert_eq!("PS5".parse::<Platform>().unwrap(), Platform::Ps5);
        assert_eq!(" nintendo ".parse::<Platform>().unwrap(), Platform::Nintendo);
    }

    #[test]
    fn platform_rejects_unknown_value() {
        let err = "dreamcast".parse::<Platform>().unwrap_err();
        assert_eq!(err, CoreError::UnknownPlatform("dreamcast".to_string()));
    }

    #[test]
    fn platform_display_matches_serde_form() {
        for platform in Platform::ALL {
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{platform}\""));
        }
    }

    #[test]
    fn discount_ratio_zero_without_original_price() {
        let product = make_product(Decimal::new(24990, 2), None);
        assert_eq!(product.discount_ratio(), Decimal::ZERO);
        assert_eq!(product.discount_percent(), 0);
    }

    #[test]
    fn discount_ratio_zero_when_original_price_is_zero() {
        let product = make_product(Decimal::ZERO, Some(Decimal::ZERO));
        assert_eq!(product.discount_ratio(), Decimal::ZERO);
    }

    #[test]
    fn discount_ratio_uses_original_price_as_base() {
        let product = make_product(Decimal::from(75), Some(Decimal::from(100)));
        assert_eq!(product.discount_ratio(), Decimal::new(25, 2));
        assert_eq!(product.discount_percent(), 25);
    }

    #[test]
    fn discount_percent_rounds_to_nearest_whole_percent() {
        // 50 / 349.90 = 14.29%
        let product = make_product(Decimal::new(29990, 2), Some(Decimal::new(34990, 2)));
        assert_eq!(product.discount_percent(), 14);
    }

    #[test]
    fn product_deserializes_with_flag_defaults() {
        let json = r#"{
            "id": "prod-009",
            "title": "Controle DualSense",
            "price": "449.90",
            "platform": "ps5",
            "category": "Acessórios"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::new(44990, 2));
        assert!(product.in_stock);
        assert!(!product.is_new);
        assert!(!product.featured);
        assert_eq!(product.stock_quantity, 0);
        assert!(product.original_price.is_none());
    }
}
