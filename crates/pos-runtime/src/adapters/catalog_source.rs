//! Catalog persistence over the key-value port.

use sb_01_catalog::{CatalogError, CatalogSource};
use sb_04_storage::{decode_catalog, encode_catalog, KeyValueStore, CATALOG_KEY};
use shared_types::CatalogItem;
use std::sync::Arc;

/// `CatalogSource` implementation backed by the storage subsystem.
///
/// Decode failures and store failures both surface as
/// `CatalogError::Source`; the store reacts by falling back to the seed
/// set and reporting the recovery.
pub struct StoredCatalogSource {
    store: Arc<dyn KeyValueStore>,
}

impl StoredCatalogSource {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CatalogSource for StoredCatalogSource {
    fn fetch(&self) -> Result<Option<Vec<CatalogItem>>, CatalogError> {
        let raw = self
            .store
            .get(CATALOG_KEY)
            .map_err(|err| CatalogError::Source(err.to_string()))?;

        match raw {
            Some(raw) => decode_catalog(&raw)
                .map(Some)
                .map_err(|err| CatalogError::Source(err.to_string())),
            None => Ok(None),
        }
    }

    fn persist(&self, items: &[CatalogItem]) -> Result<(), CatalogError> {
        let raw = encode_catalog(items).map_err(|err| CatalogError::Source(err.to_string()))?;
        self.store
            .set(CATALOG_KEY, &raw)
            .map_err(|err| CatalogError::Source(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_04_storage::MemoryStore;

    #[test]
    fn test_fetch_absent_is_none() {
        let source = StoredCatalogSource::new(Arc::new(MemoryStore::new()));
        assert!(source.fetch().unwrap().is_none());
    }

    #[test]
    fn test_round_trip() {
        let source = StoredCatalogSource::new(Arc::new(MemoryStore::new()));
        let items = vec![CatalogItem::new(
            "1234567890".into(),
            "Widget".into(),
            9.99,
            3,
        )];
        source.persist(&items).unwrap();
        assert_eq!(source.fetch().unwrap().unwrap(), items);
    }

    #[test]
    fn test_malformed_record_is_source_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(CATALOG_KEY, "not a list").unwrap();

        let source = StoredCatalogSource::new(store);
        assert!(matches!(source.fetch(), Err(CatalogError::Source(_))));
    }
}
