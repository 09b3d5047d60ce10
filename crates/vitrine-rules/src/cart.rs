use vitrine_core::{CartLine, Product};

/// Lines in the shopping cart, one per product, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0_u32, |total, l| total.saturating_add(l.quantity))
    }

    #[must_use]
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);
        match self.line_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
    }

    /// Sets a line's quantity. Values below 1 are ignored; returns whether
    /// anything changed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        match self.line_mut(product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    pub fn increment(&mut self, product_id: &str) -> bool {
        let Some(current) = self.line(product_id).map(|l| l.quantity) else {
            return false;
        };
        self.set_quantity(product_id, current.saturating_add(1))
    }

    /// Decrements a line; a line at quantity 1 stays in the cart.
    pub fn decrement(&mut self, product_id: &str) -> bool {
        let Some(current) = self.line(product_id).map(|l| l.quantity) else {
            return false;
        };
        self.set_quantity(product_id, current.saturating_sub(1))
    }

    pub fn remove(&mut self, product_id: &str) -> Option<CartLine> {
        let pos = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(pos))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn line_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}
