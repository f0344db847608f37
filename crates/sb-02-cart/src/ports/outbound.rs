//! Outbound (Driven) ports for the Cart Ledger subsystem.
//!
//! The ledger never owns catalog state; it reads and adjusts stock
//! strictly through this trait.

use crate::domain::CartError;
use shared_types::CatalogItem;

/// Catalog stock dependency for cart reconciliation.
pub trait StockProvider: Send + Sync {
    /// Snapshot of a catalog item (name/price/stock) by identifier.
    ///
    /// Returns `None` if the identifier is not in the catalog.
    fn item(&self, id: &str) -> Option<CatalogItem>;

    /// Applies a signed stock delta, flooring at zero, and returns the
    /// stock actually reached.
    ///
    /// # Errors
    /// - `NotFound` if the identifier is not in the catalog
    fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<u32, CartError>;
}

/// Mock stock provider for testing.
#[cfg(test)]
pub struct MockStockProvider {
    items: Vec<CatalogItem>,
}

#[cfg(test)]
impl MockStockProvider {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_item(mut self, id: &str, name: &str, price: f64, stock: u32) -> Self {
        self.items
            .push(CatalogItem::new(id.into(), name.into(), price, stock));
        self
    }

    pub fn stock_of(&self, id: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.stock())
    }

    pub fn set_price(&mut self, id: &str, price: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.price = price;
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }
}

#[cfg(test)]
impl StockProvider for MockStockProvider {
    fn item(&self, id: &str) -> Option<CatalogItem> {
        self.items.iter().find(|item| item.id == id).cloned()
    }

    fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<u32, CartError> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => Ok(item.saturating_adjust(delta)),
            None => Err(CartError::NotFound { id: id.to_string() }),
        }
    }
}
