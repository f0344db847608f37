//! Stock provider over the live catalog store.

use sb_01_catalog::CatalogStore;
use sb_02_cart::{CartError, StockProvider};
use shared_types::CatalogItem;

/// `StockProvider` implementation borrowing the session's catalog for the
/// duration of one cart mutation.
pub struct CatalogStockAdapter<'a> {
    catalog: &'a mut CatalogStore,
}

impl<'a> CatalogStockAdapter<'a> {
    pub fn new(catalog: &'a mut CatalogStore) -> Self {
        Self { catalog }
    }
}

impl StockProvider for CatalogStockAdapter<'_> {
    fn item(&self, id: &str) -> Option<CatalogItem> {
        self.catalog.find(id).cloned()
    }

    fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<u32, CartError> {
        // The only failure the catalog reports here is an unknown identifier.
        self.catalog
            .adjust_stock(id, delta)
            .map_err(|_| CartError::NotFound { id: id.to_string() })
    }
}
