//! Session-owned state: the product index, the shopper's cart, warehouse stock
//! and the adjustment ledger. Stock changes go through
//! [`SessionStore::adjust_stock`] only.

use chrono::{DateTime, Utc};
use vitrine_core::{
    AdjustmentRecord, Catalog, CartLine, PricingResult, StockItem, ValidationError,
};

use crate::cart::Cart;
use crate::index::ProductIndex;
use crate::ledger::{self, StockLedger};
use crate::pricing;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    index: ProductIndex,
    stock: Vec<StockItem>,
    ledger: StockLedger,
    cart: Cart,
}

impl SessionStore {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            index: ProductIndex::new(catalog.products),
            stock: catalog.stock,
            ledger: StockLedger::default(),
            cart: Cart::default(),
        }
    }

    #[must_use]
    pub fn index(&self) -> &ProductIndex {
        &self.index
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn stock_items(&self) -> &[StockItem] {
        &self.stock
    }

    #[must_use]
    pub fn stock_item(&self, id: &str) -> Option<&StockItem> {
        self.stock.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Adds a catalog product to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownProduct`] for an id not in the index
    /// and [`ValidationError::InvalidQuantity`] for a zero quantity.
    pub fn add_to_cart(
        &mut self,
        product_id: &str,
        quantity: u32,
    ) -> Result<&CartLine, ValidationError> {
        if quantity == 0 {
            return Err(ValidationError::InvalidQuantity(quantity));
        }
        let product = self
            .index
            .get(product_id)
            .ok_or_else(|| ValidationError::UnknownProduct(product_id.to_string()))?;
        self.cart.add(product, quantity);
        self.cart
            .line(product_id)
            .ok_or_else(|| ValidationError::UnknownProduct(product_id.to_string()))
    }

    pub fn set_cart_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        self.cart.set_quantity(product_id, quantity)
    }

    pub fn increment_cart_line(&mut self, product_id: &str) -> bool {
        self.cart.increment(product_id)
    }

    pub fn decrement_cart_line(&mut self, product_id: &str) -> bool {
        self.cart.decrement(product_id)
    }

    pub fn remove_from_cart(&mut self, product_id: &str) -> Option<CartLine> {
        self.cart.remove(product_id)
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Prices the current cart.
    #[must_use]
    pub fn quote(&self, coupon: Option<&str>) -> PricingResult {
        pricing::compute(self.cart.lines(), coupon)
    }

    /// Applies a stock adjustment stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::adjust_stock_at`].
    pub fn adjust_stock(
        &mut self,
        stock_item_id: &str,
        delta: i64,
        reason: &str,
    ) -> Result<&AdjustmentRecord, ValidationError> {
        self.adjust_stock_at(stock_item_id, delta, reason, Utc::now())
    }

    /// Validates and applies a stock adjustment, then records it.
    ///
    /// On error the stock item, the linked product and the ledger are all
    /// left exactly as they were.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownStockItem`] for an unknown id, or any
    /// error from [`ledger::adjust`].
    pub fn adjust_stock_at(
        &mut self,
        stock_item_id: &str,
        delta: i64,
        reason: &str,
        at: DateTime<Utc>,
    ) -> Result<&AdjustmentRecord, ValidationError> {
        let Some(slot) = self.stock.iter().position(|s| s.id == stock_item_id) else {
            tracing::warn!(stock_item_id, "stock adjustment rejected: unknown item");
            return Err(ValidationError::UnknownStockItem(stock_item_id.to_string()));
        };

        let adjustment = match ledger::adjust(&self.stock[slot], delta, reason, at) {
            Ok(adjustment) => adjustment,
            Err(err) => {
                tracing::warn!(stock_item_id, delta, error = %err, "stock adjustment rejected");
                return Err(err);
            }
        };

        let ledger::Adjustment { item, record } = adjustment;
        self.index
            .set_stock_quantity(&item.product_id, item.quantity);
        tracing::info!(
            stock_item_id,
            previous = record.previous_quantity,
            new = record.new_quantity,
            status = %item.status(),
            "stock adjusted"
        );
        self.stock[slot] = item;

        Ok(self.ledger.append(record))
    }
}
