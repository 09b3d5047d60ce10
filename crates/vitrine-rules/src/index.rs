//! Read-only access to the product collection, plus the distinct option
//! lists used to build the catalog filter sidebar.

use std::collections::HashSet;

use vitrine_core::{Platform, Product};

/// Products in the order the data source supplied them.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex {
    products: Vec<Product>,
}

impl ProductIndex {
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct platforms in first-seen order.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.platform)
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Mirrors a stock-ledger quantity onto the product record.
    pub(crate) fn set_stock_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        match self.products.iter_mut().find(|p| p.id == product_id) {
            Some(product) => {
                product.stock_quantity = quantity;
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a ProductIndex {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
