//! # End-to-End Operator Scenarios
//!
//! Drives the billing session through the flows an operator actually
//! performs: adding stock to a bill, over-allocation on add vs edit,
//! removal, clearing, and the documented data-loss edge case around
//! catalog deletions with live cart lines.

#[cfg(test)]
mod tests {
    use pos_runtime::{BillingSession, NullRenderer};
    use sb_01_catalog::ProductDraft;
    use sb_02_cart::CartError;
    use sb_04_storage::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    const WIDGET: &str = "1000000001";
    const GADGET: &str = "2000000002";

    /// Session over a fresh memory store with a fixed two-item catalog:
    /// Widget (price 100, stock 5) and Gadget (price 250, stock 8).
    fn fixture_session() -> BillingSession {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let mut session = BillingSession::start(store, Box::new(NullRenderer));
        session.replace_catalog(vec![
            ProductDraft {
                id: WIDGET.into(),
                name: "Widget".into(),
                price: 100.0,
                stock: 5,
            },
            ProductDraft {
                id: GADGET.into(),
                name: "Gadget".into(),
                price: 250.0,
                stock: 8,
            },
        ]);
        session
    }

    #[test]
    fn test_second_add_beyond_pool_is_rejected() {
        // Stock 5: add 3 succeeds, adding 3 more would need 6 of 5 and is
        // rejected with the computed ceiling; nothing changes.
        let mut session = fixture_session();

        session.add_to_cart(WIDGET, 3).unwrap();
        assert_eq!(session.catalog().find(WIDGET).unwrap().stock(), 2);

        let err = session.add_to_cart(WIDGET, 3).unwrap_err();
        assert_eq!(
            err,
            CartError::InsufficientStock {
                requested: 6,
                available: 5,
            }
        );
        assert_eq!(session.catalog().find(WIDGET).unwrap().stock(), 2);
        assert_eq!(session.cart().lines()[0].quantity, 3);
    }

    #[test]
    fn test_exhausted_item_goes_out_of_stock() {
        let mut session = fixture_session();

        session.add_to_cart(WIDGET, 5).unwrap();
        let item = session.catalog().find(WIDGET).unwrap();
        assert_eq!(item.stock(), 0);
        assert!(!item.in_stock());

        assert_eq!(
            session.add_to_cart(WIDGET, 1).unwrap_err(),
            CartError::OutOfStock { id: WIDGET.into() }
        );
    }

    #[test]
    fn test_edit_clamps_where_add_rejects() {
        // Line qty 4 with stock 1 leaves a pool of 5. An add of 6 would be
        // rejected; an edit to 10 clamps to 5 and says so.
        let mut session = fixture_session();
        session.add_to_cart(WIDGET, 4).unwrap();
        assert_eq!(session.catalog().find(WIDGET).unwrap().stock(), 1);

        let committed = session.edit_cart_line(0, 10).unwrap();
        let clamp = committed.value.clamped.expect("edit should clamp");
        assert_eq!(clamp.requested, 10);
        assert_eq!(clamp.available, 5);
        assert_eq!(committed.value.line.quantity, 5);
        assert_eq!(session.catalog().find(WIDGET).unwrap().stock(), 0);
    }

    #[test]
    fn test_remove_restores_stock_and_flag() {
        let mut session = fixture_session();
        session.add_to_cart(WIDGET, 3).unwrap();
        assert_eq!(session.catalog().find(WIDGET).unwrap().stock(), 2);

        let committed = session.remove_cart_line(0).unwrap();
        assert_eq!(committed.value.quantity, 3);

        let item = session.catalog().find(WIDGET).unwrap();
        assert_eq!(item.stock(), 5);
        assert!(item.in_stock());
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_reference_totals() {
        // Subtotal 1000, discount 10%, tax 18% → 100 / 900 / 162 / 1062.00.
        let mut session = fixture_session();
        session.add_to_cart(WIDGET, 5).unwrap(); // 500
        session.add_to_cart(GADGET, 2).unwrap(); // 500
        session.set_discount_rate(10.0);
        session.set_tax_rate(18.0);

        let totals = session.totals().rounded();
        assert_eq!(totals.subtotal, 1000.0);
        assert_eq!(totals.discount_amount, 100.0);
        assert_eq!(totals.discounted_total, 900.0);
        assert_eq!(totals.tax_amount, 162.0);
        assert_eq!(totals.final_total, 1062.0);
    }

    #[test]
    fn test_clear_with_deleted_catalog_item_loses_stock() {
        // Known data-loss edge case: Widget is deleted from the catalog
        // while 2 units sit in the cart. Clearing drops those units;
        // they are not restored anywhere.
        let mut session = fixture_session();
        session.add_to_cart(WIDGET, 2).unwrap();
        session.add_to_cart(GADGET, 1).unwrap();
        session.remove_catalog_item(WIDGET).unwrap();

        let committed = session.clear_bill();
        assert_eq!(committed.value.restored, 1);
        assert_eq!(committed.value.dropped.len(), 1);
        assert_eq!(committed.value.dropped[0].name, "Widget");
        assert_eq!(committed.value.dropped[0].quantity, 2);

        // Gadget got its unit back; Widget is simply gone.
        assert!(session.catalog().find(WIDGET).is_none());
        assert_eq!(session.catalog().find(GADGET).unwrap().stock(), 8);
    }

    #[test]
    fn test_edit_orphaned_line_changes_quantity_only() {
        let mut session = fixture_session();
        session.add_to_cart(WIDGET, 2).unwrap();
        session.remove_catalog_item(WIDGET).unwrap();

        // The line still edits, with nothing to reconcile against.
        let committed = session.edit_cart_line(0, 9).unwrap();
        assert_eq!(committed.value.line.quantity, 9);
        assert!(committed.value.clamped.is_none());
    }

    #[test]
    fn test_line_snapshots_survive_catalog_price_change() {
        let mut session = fixture_session();
        session.add_to_cart(WIDGET, 1).unwrap();

        // Re-author the catalog with a new Widget price.
        session.replace_catalog(vec![ProductDraft {
            id: WIDGET.into(),
            name: "Widget".into(),
            price: 175.0,
            stock: 4,
        }]);

        // The cart line keeps its add-time snapshot.
        assert_eq!(session.cart().lines()[0].price, 100.0);
        let totals = session.totals();
        assert!((totals.subtotal - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_clear_resets_rates_to_defaults() {
        let mut session = fixture_session();
        session.add_to_cart(GADGET, 1).unwrap();
        session.set_discount_rate(25.0);
        session.set_tax_rate(5.0);

        session.clear_bill();
        assert_eq!(session.cart().discount_rate(), 0.0);
        assert_eq!(session.cart().tax_rate(), 18.0);
        assert_eq!(session.totals().final_total, 0.0);
    }

    #[test]
    fn test_duplicate_catalog_insert_is_rejected() {
        let mut session = fixture_session();
        let err = session
            .add_catalog_item(ProductDraft {
                id: WIDGET.into(),
                name: "Widget again".into(),
                price: 1.0,
                stock: 1,
            })
            .unwrap_err();
        assert_eq!(
            err,
            sb_01_catalog::CatalogError::DuplicateIdentifier { id: WIDGET.into() }
        );
        assert_eq!(session.catalog().len(), 2);
    }
}
