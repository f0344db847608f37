//! # Billing Session
//!
//! Owns the live catalog and cart for one operator session. Every
//! mutation runs to completion synchronously: validate, apply, persist
//! both records, re-render. There is exactly one mutator; no locking or
//! transaction discipline is needed.
//!
//! Persistence failures never roll back the in-memory mutation that
//! triggered them; they are logged and reported alongside the successful
//! result in [`Committed::storage_warnings`].

use crate::adapters::{BillingRecordStore, CatalogStockAdapter, StoredCatalogSource};
use crate::render::{RenderSink, ViewSnapshot};
use sb_01_catalog::{
    CatalogError, CatalogSource, CatalogStore, ProductDraft, ReplaceReport,
};
use sb_02_cart::{AddReceipt, CartError, CartLedger, ClearReceipt, EditReceipt};
use sb_03_totals::{compute, InvoiceTotals};
use sb_04_storage::KeyValueStore;
use shared_types::CatalogItem;
use std::sync::Arc;
use tracing::{info, warn};

/// A successful in-memory mutation plus any non-fatal storage warnings
/// that occurred while mirroring it.
#[derive(Debug, Clone)]
pub struct Committed<T> {
    /// The operation's receipt.
    pub value: T,
    /// Human-readable write failures (empty on a clean persist).
    pub storage_warnings: Vec<String>,
}

/// The live billing session.
pub struct BillingSession {
    catalog: CatalogStore,
    cart: CartLedger,
    catalog_source: StoredCatalogSource,
    billing: BillingRecordStore,
    renderer: Box<dyn RenderSink>,
    catalog_query: String,
    cart_query: String,
}

impl BillingSession {
    /// Restores a session from storage and performs the initial render.
    ///
    /// Catalog restore seeds/migrates/recovers as needed; a corrupt
    /// billing record is cleared and the bill starts fresh.
    pub fn start(store: Arc<dyn KeyValueStore>, renderer: Box<dyn RenderSink>) -> Self {
        let catalog_source = StoredCatalogSource::new(Arc::clone(&store));
        let (catalog, report) = CatalogStore::restore(&catalog_source);
        info!(
            items = catalog.len(),
            seeded = report.seeded,
            migrated_ids = report.migrated_ids,
            "catalog restored"
        );
        if let Some(reason) = &report.recovered {
            warn!(reason = %reason, "catalog recovered from unreadable record");
        }

        let billing = BillingRecordStore::new(store);
        let cart = CartLedger::from_state(billing.load());
        info!(lines = cart.len(), "billing state restored");

        let mut session = Self {
            catalog,
            cart,
            catalog_source,
            billing,
            renderer,
            catalog_query: String::new(),
            cart_query: String::new(),
        };
        session.render();
        session
    }

    /// The live catalog (read-only).
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The live cart (read-only).
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    /// Totals over the full cart.
    pub fn totals(&self) -> InvoiceTotals {
        compute(
            self.cart.lines(),
            self.cart.discount_rate(),
            self.cart.tax_rate(),
        )
    }

    /// Snapshot for the rendering collaborator: filtered views + totals.
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            catalog: self
                .catalog
                .filter(&self.catalog_query)
                .into_iter()
                .cloned()
                .collect(),
            cart: self
                .cart
                .filter(&self.cart_query)
                .into_iter()
                .cloned()
                .collect(),
            totals: self.totals(),
        }
    }

    /// Snapshot for the print/export collaborator: the cart unfiltered.
    pub fn invoice_view(&self) -> ViewSnapshot {
        ViewSnapshot {
            catalog: Vec::new(),
            cart: self.cart.lines().to_vec(),
            totals: self.totals(),
        }
    }

    /// Sets the catalog search query and re-renders.
    pub fn set_catalog_query(&mut self, query: impl Into<String>) {
        self.catalog_query = query.into();
        self.render();
    }

    /// Sets the cart search query and re-renders.
    pub fn set_cart_query(&mut self, query: impl Into<String>) {
        self.cart_query = query.into();
        self.render();
    }

    /// Adds catalog units to the bill. Rejects over-allocation.
    pub fn add_to_cart(
        &mut self,
        id: &str,
        quantity: i64,
    ) -> Result<Committed<AddReceipt>, CartError> {
        let receipt = {
            let mut stock = CatalogStockAdapter::new(&mut self.catalog);
            self.cart.add_item(&mut stock, id, quantity)?
        };
        let warnings = self.persist_both();
        self.render();
        Ok(Committed {
            value: receipt,
            storage_warnings: warnings,
        })
    }

    /// Changes a bill line's quantity. Clamps to the available pool.
    pub fn edit_cart_line(
        &mut self,
        index: usize,
        quantity: i64,
    ) -> Result<Committed<EditReceipt>, CartError> {
        let receipt = {
            let mut stock = CatalogStockAdapter::new(&mut self.catalog);
            self.cart.edit_quantity(&mut stock, index, quantity)?
        };
        let warnings = self.persist_both();
        self.render();
        Ok(Committed {
            value: receipt,
            storage_warnings: warnings,
        })
    }

    /// Deletes a bill line, restoring its stock. Pre-confirmed: the
    /// confirmation prompt is the console collaborator's concern.
    pub fn remove_cart_line(
        &mut self,
        index: usize,
    ) -> Result<Committed<shared_types::CartLine>, CartError> {
        let line = {
            let mut stock = CatalogStockAdapter::new(&mut self.catalog);
            self.cart.remove_line(&mut stock, index)?
        };
        let warnings = self.persist_both();
        self.render();
        Ok(Committed {
            value: line,
            storage_warnings: warnings,
        })
    }

    /// Clears the whole bill: restores stock, resets rates to 0 / 18,
    /// removes the billing record, resets the cart search. Pre-confirmed.
    pub fn clear_bill(&mut self) -> Committed<ClearReceipt> {
        let receipt = {
            let mut stock = CatalogStockAdapter::new(&mut self.catalog);
            self.cart.clear(&mut stock)
        };

        let mut warnings = Vec::new();
        if let Some(warning) = self.persist_catalog() {
            warnings.push(warning);
        }
        // Clearing removes the record outright rather than writing an
        // empty bill.
        if let Err(err) = self.billing.clear() {
            warn!(error = %err, "unable to remove billing record");
            warnings.push(err.to_string());
        }

        self.cart_query.clear();
        self.render();
        Committed {
            value: receipt,
            storage_warnings: warnings,
        }
    }

    /// Sets the discount percent (clamped to `[0, 100]`).
    pub fn set_discount_rate(&mut self, rate: f64) -> Committed<()> {
        self.cart.set_discount_rate(rate);
        let warnings = self.persist_billing().into_iter().collect();
        self.render();
        Committed {
            value: (),
            storage_warnings: warnings,
        }
    }

    /// Sets the tax percent (clamped to `[0, 100]`).
    pub fn set_tax_rate(&mut self, rate: f64) -> Committed<()> {
        self.cart.set_tax_rate(rate);
        let warnings = self.persist_billing().into_iter().collect();
        self.render();
        Committed {
            value: (),
            storage_warnings: warnings,
        }
    }

    /// Adds a product to the catalog.
    pub fn add_catalog_item(
        &mut self,
        draft: ProductDraft,
    ) -> Result<Committed<CatalogItem>, CatalogError> {
        let item = self.catalog.insert(draft)?;
        let warnings = self.persist_catalog().into_iter().collect();
        self.render();
        Ok(Committed {
            value: item,
            storage_warnings: warnings,
        })
    }

    /// Removes a product from the catalog. Pre-confirmed. Cart lines that
    /// reference it become orphans (their reservation is dropped on
    /// remove/clear).
    pub fn remove_catalog_item(
        &mut self,
        id: &str,
    ) -> Result<Committed<CatalogItem>, CatalogError> {
        let item = self.catalog.remove(id)?;
        let warnings = self.persist_catalog().into_iter().collect();
        self.render();
        Ok(Committed {
            value: item,
            storage_warnings: warnings,
        })
    }

    /// Replaces the catalog with edited rows (bulk catalog-edit save).
    pub fn replace_catalog(&mut self, drafts: Vec<ProductDraft>) -> Committed<ReplaceReport> {
        let report = self.catalog.replace_all(drafts);
        let warnings = self.persist_catalog().into_iter().collect();
        self.render();
        Committed {
            value: report,
            storage_warnings: warnings,
        }
    }

    fn render(&mut self) {
        let view = self.snapshot();
        self.renderer.render(&view);
    }

    fn persist_catalog(&self) -> Option<String> {
        match self.catalog_source.persist(self.catalog.items()) {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "unable to persist catalog, continuing in memory");
                Some(err.to_string())
            }
        }
    }

    fn persist_billing(&self) -> Option<String> {
        match self.billing.save(&self.cart.billing_state()) {
            Ok(()) => None,
            Err(err) => {
                warn!(error = %err, "unable to persist billing state, continuing in memory");
                Some(err.to_string())
            }
        }
    }

    fn persist_both(&self) -> Vec<String> {
        self.persist_catalog()
            .into_iter()
            .chain(self.persist_billing())
            .collect()
    }
}
