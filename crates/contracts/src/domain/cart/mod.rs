use crate::domain::catalog::{ProductCategory, ProductKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One distinct product in the shopping cart. Identity is
/// `(category, product_id)`; adding the same product again merges into the
/// existing line's quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub category: ProductCategory,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.category, self.product_id)
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// The in-memory cart snapshot. Persistence is the caller's concern: every
/// mutation here is followed by a write-through to client storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds a product, merging quantity into an existing line on key match.
    pub fn add(&mut self, line: CartLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key() == line.key()) {
            existing.quantity += line.quantity;
        } else {
            self.lines.push(line);
        }
    }

    pub fn remove(&mut self, key: ProductKey) {
        self.lines.retain(|l| l.key() != key);
    }

    /// Sets a line's quantity; anything below 1 removes the line.
    pub fn set_quantity(&mut self, key: ProductKey, quantity: u32) {
        if quantity < 1 {
            self.remove(key);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.key() == key) {
            line.quantity = quantity;
        }
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Keys of everything currently in the cart; the pairing resolver
    /// excludes these from its candidates.
    pub fn keys(&self) -> HashSet<ProductKey> {
        self.lines.iter().map(CartLine::key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: ProductCategory, id: i64, price: f64, quantity: u32) -> CartLine {
        CartLine {
            product_id: id,
            category,
            name: format!("product-{id}"),
            price,
            quantity,
        }
    }

    #[test]
    fn add_merges_on_same_key() {
        let mut cart = Cart::default();
        cart.add(line(ProductCategory::Wine, 7, 2400.0, 1));
        cart.add(line(ProductCategory::Wine, 7, 2400.0, 2));
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 3);
    }

    #[test]
    fn same_id_different_category_stays_distinct() {
        let mut cart = Cart::default();
        cart.add(line(ProductCategory::Wine, 7, 2400.0, 1));
        cart.add(line(ProductCategory::Coffee, 7, 900.0, 1));
        assert_eq!(cart.lines.len(), 2);
    }

    #[test]
    fn set_quantity_below_one_removes_line() {
        let mut cart = Cart::default();
        cart.add(line(ProductCategory::Coffee, 3, 900.0, 2));
        cart.set_quantity(ProductKey::new(ProductCategory::Coffee, 3), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn totals_and_counts() {
        let mut cart = Cart::default();
        cart.add(line(ProductCategory::Wine, 1, 1000.0, 2));
        cart.add(line(ProductCategory::Coffee, 2, 500.0, 3));
        assert_eq!(cart.total(), 3500.0);
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.keys().len(), 2);
    }
}
