use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Platform, Product};

/// One product in the shopping cart.
///
/// Title, price, platform and image are copied from the product when the line
/// is created so later catalog edits do not reprice an open cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub title: String,
    pub price: Decimal,
    pub platform: Platform,
    pub image: Option<String>,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshots `product` into a new line. A zero quantity is raised to 1.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            platform: product.platform,
            image: product.image.clone(),
            quantity: quantity.max(1),
        }
    }

    /// `price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Cart totals derived on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
    pub per_installment: Decimal,
    /// `true` only when the submitted coupon code was recognised.
    pub coupon_applied: bool,
}

impl PricingResult {
    #[must_use]
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
