//! # Persistence Round-Trips and Recovery
//!
//! Exercises the full load/save path: restart equivalence, seed fallback
//! on malformed catalogs, fresh-bill recovery on corrupt billing records,
//! legacy identifier migration, and the non-fatal write-failure policy.

#[cfg(test)]
mod tests {
    use pos_runtime::{BillingSession, NullRenderer};
    use sb_01_catalog::ProductDraft;
    use sb_04_storage::{
        JsonFileStore, KeyValueStore, MemoryStore, QuotaExceededStore, BILLING_KEY, CATALOG_KEY,
    };
    use shared_types::product_id;
    use std::sync::Arc;

    fn start(store: Arc<dyn KeyValueStore>) -> BillingSession {
        BillingSession::start(store, Box::new(NullRenderer))
    }

    #[test]
    fn test_restart_reproduces_catalog_and_bill() {
        let store = Arc::new(MemoryStore::new());
        let lines_before;
        let totals_before;
        {
            let mut session = start(Arc::clone(&store) as Arc<dyn KeyValueStore>);
            let first = session.catalog().items()[2].id.clone();
            let second = session.catalog().items()[7].id.clone();
            session.add_to_cart(&first, 2).unwrap();
            session.add_to_cart(&second, 1).unwrap();
            session.add_to_cart(&first, 1).unwrap();
            session.set_discount_rate(7.5);
            session.set_tax_rate(12.0);
            lines_before = session.cart().lines().to_vec();
            totals_before = session.totals();
        }

        let session = start(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        // Cart lines come back in order, with snapshots intact.
        assert_eq!(session.cart().lines(), lines_before.as_slice());
        assert_eq!(session.cart().discount_rate(), 7.5);
        assert_eq!(session.cart().tax_rate(), 12.0);
        assert_eq!(session.catalog().len(), 10);
        let totals = session.totals();
        assert!((totals.final_total - totals_before.final_total).abs() < 1e-9);
    }

    #[test]
    fn test_restart_through_file_store() {
        let mut path = std::env::temp_dir();
        path.push(format!("smartbill-it-{}.json", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let id;
        {
            let store = Arc::new(JsonFileStore::open(&path).unwrap());
            let mut session = start(store);
            id = session.catalog().items()[0].id.clone();
            session.add_to_cart(&id, 2).unwrap();
        }

        let store = Arc::new(JsonFileStore::open(&path).unwrap());
        let session = start(store);
        assert_eq!(session.cart().lines()[0].id.as_deref(), Some(id.as_str()));
        assert_eq!(session.catalog().find(&id).unwrap().stock(), 23);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_catalog_falls_back_to_seed() {
        let store = Arc::new(MemoryStore::new());
        store.set(CATALOG_KEY, "{\"not\":\"a list\"}").unwrap();

        let session = start(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        assert_eq!(session.catalog().len(), 10);
        // The seed set replaced the bad record in storage.
        let raw = store.get(CATALOG_KEY).unwrap().unwrap();
        assert!(raw.contains("Laptop Computer"));
    }

    #[test]
    fn test_catalog_item_missing_field_falls_back_to_seed() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(CATALOG_KEY, r#"[{"name":"No id","price":1.0,"stock":1}]"#)
            .unwrap();

        let session = start(store);
        assert_eq!(session.catalog().len(), 10);
        assert!(session.catalog().find("No id").is_none());
    }

    #[test]
    fn test_corrupt_billing_record_starts_fresh_and_clears_key() {
        let store = Arc::new(MemoryStore::new());
        store.set(BILLING_KEY, "corrupt{{{").unwrap();

        let session = start(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        assert!(session.cart().is_empty());
        assert_eq!(session.cart().discount_rate(), 0.0);
        assert_eq!(session.cart().tax_rate(), 18.0);
        assert_eq!(store.get(BILLING_KEY).unwrap(), None);
    }

    #[test]
    fn test_legacy_billing_lines_without_ids() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                BILLING_KEY,
                r#"{"products":[{"name":"Old Widget","quantity":2,"price":9.5}],"discountRate":5,"taxRate":12}"#,
            )
            .unwrap();

        let session = start(store);
        assert_eq!(session.cart().len(), 1);
        let line = &session.cart().lines()[0];
        assert_eq!(line.id, None);
        assert_eq!(line.quantity, 2);
        assert_eq!(session.cart().discount_rate(), 5.0);
    }

    #[test]
    fn test_legacy_catalog_ids_migrate_once() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                CATALOG_KEY,
                r#"[{"id":"PROD-001","name":"Legacy","price":5.0,"stock":3,"inStock":true},
                    {"id":"1234567890","name":"Modern","price":7.0,"stock":4,"inStock":true}]"#,
            )
            .unwrap();

        let session = start(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        assert_eq!(session.catalog().len(), 2);
        assert_eq!(session.catalog().items()[0].name, "Legacy");
        let migrated = session.catalog().items()[0].id.clone();
        assert!(product_id::is_well_formed(&migrated));
        assert_eq!(session.catalog().items()[1].id, "1234567890");
        drop(session);

        // A second restart keeps the migrated identifier stable.
        let session = start(store);
        assert_eq!(session.catalog().items()[0].id, migrated);
    }

    #[test]
    fn test_stale_in_stock_flag_is_recomputed_on_load() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(
                CATALOG_KEY,
                r#"[{"id":"1234567890","name":"Stale","price":5.0,"stock":0,"inStock":true}]"#,
            )
            .unwrap();

        let session = start(store);
        let item = session.catalog().find("1234567890").unwrap();
        assert_eq!(item.stock(), 0);
        assert!(!item.in_stock());
    }

    #[test]
    fn test_write_failures_never_block_mutations() {
        let store = Arc::new(QuotaExceededStore::new());
        let mut session = start(Arc::clone(&store) as Arc<dyn KeyValueStore>);
        session.replace_catalog(vec![ProductDraft {
            id: "1000000001".into(),
            name: "Widget".into(),
            price: 10.0,
            stock: 5,
        }]);

        store.set_failing(true);
        let add = session.add_to_cart("1000000001", 2).unwrap();
        assert!(!add.storage_warnings.is_empty());
        let edit = session.edit_cart_line(0, 4).unwrap();
        assert!(!edit.storage_warnings.is_empty());
        let clear = session.clear_bill();
        assert!(!clear.storage_warnings.is_empty());

        // In-memory state is fully consistent throughout.
        assert!(session.cart().is_empty());
        assert_eq!(session.catalog().find("1000000001").unwrap().stock(), 5);
    }
}
