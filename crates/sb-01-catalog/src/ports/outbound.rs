//! Outbound (Driven) ports for the Catalog Store subsystem.

use crate::domain::CatalogError;
use shared_types::CatalogItem;

/// Persistence source for the catalog.
///
/// Implemented in the runtime over the key-value storage subsystem. The
/// store treats it as a dumb record: decode/validation policy lives behind
/// this trait, and any failure surfaces as `CatalogError::Source`.
pub trait CatalogSource: Send + Sync {
    /// Fetches the persisted catalog.
    ///
    /// # Returns
    /// - `Ok(Some(items))`: a readable record
    /// - `Ok(None)`: no record exists (first run)
    /// - `Err`: the record exists but is malformed, or the store failed
    fn fetch(&self) -> Result<Option<Vec<CatalogItem>>, CatalogError>;

    /// Persists the full catalog, replacing any previous record.
    fn persist(&self, items: &[CatalogItem]) -> Result<(), CatalogError>;
}

/// Controllable catalog source for unit tests.
#[cfg(test)]
pub struct MockCatalogSource {
    items: std::sync::RwLock<Option<Vec<CatalogItem>>>,
    fetch_error: Option<String>,
    persist_error: Option<String>,
    persisted: std::sync::RwLock<Option<Vec<CatalogItem>>>,
}

#[cfg(test)]
impl MockCatalogSource {
    /// A source with no stored record.
    pub fn empty() -> Self {
        Self {
            items: std::sync::RwLock::new(None),
            fetch_error: None,
            persist_error: None,
            persisted: std::sync::RwLock::new(None),
        }
    }

    /// A source holding a readable record.
    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        let source = Self::empty();
        *source.items.write().unwrap() = Some(items);
        source
    }

    /// A source whose fetch fails (malformed record).
    pub fn failing_fetch(reason: &str) -> Self {
        let mut source = Self::empty();
        source.fetch_error = Some(reason.to_string());
        source
    }

    /// Makes every persist fail (simulated quota exhaustion).
    pub fn with_failing_persist(mut self, reason: &str) -> Self {
        self.persist_error = Some(reason.to_string());
        self
    }

    /// The last successfully persisted catalog, if any.
    pub fn persisted(&self) -> Option<Vec<CatalogItem>> {
        self.persisted.read().unwrap().clone()
    }
}

#[cfg(test)]
impl CatalogSource for MockCatalogSource {
    fn fetch(&self) -> Result<Option<Vec<CatalogItem>>, CatalogError> {
        if let Some(reason) = &self.fetch_error {
            return Err(CatalogError::Source(reason.clone()));
        }
        Ok(self.items.read().unwrap().clone())
    }

    fn persist(&self, items: &[CatalogItem]) -> Result<(), CatalogError> {
        if let Some(reason) = &self.persist_error {
            return Err(CatalogError::Source(reason.clone()));
        }
        *self.persisted.write().unwrap() = Some(items.to_vec());
        Ok(())
    }
}
