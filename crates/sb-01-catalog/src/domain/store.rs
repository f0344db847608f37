//! # Catalog Store
//!
//! The owned product collection with validation and stock arithmetic.
//!
//! All stock mutations clamp at the zero floor and recompute the
//! availability flag; lookup is exact-match on identifier; filtering is a
//! case-insensitive substring match on name or identifier, preserving
//! insertion order.

use super::errors::CatalogError;
use super::seed::seed_items;
use crate::ports::CatalogSource;
use shared_types::{product_id, CatalogItem};
use tracing::{info, warn};

/// Raw input for a catalog insert or bulk replacement row.
///
/// Stock is signed on the way in; negative values are clamped to zero
/// rather than rejected.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// Outcome of [`CatalogStore::restore`].
#[derive(Debug, Clone, Default)]
pub struct RestoreReport {
    /// The seed set was used (no record, or fallback after a load error).
    pub seeded: bool,
    /// The load error we recovered from, if any.
    pub recovered: Option<String>,
    /// Number of identifiers regenerated by migration.
    pub migrated_ids: usize,
    /// A persist failure during restore, if any (non-fatal).
    pub persist_warning: Option<String>,
}

/// Outcome of [`CatalogStore::replace_all`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceReport {
    /// Rows accepted into the new catalog.
    pub kept: usize,
    /// Rows dropped for an empty identifier/name or negative price.
    pub dropped: usize,
}

/// The catalog of purchasable products.
///
/// INVARIANTS:
/// - Stock never negative (structural + clamped drafts)
/// - `inStock` flag always derived from stock
/// - Identifiers unique on insert
/// - Item order is insertion order
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    items: Vec<CatalogItem>,
}

impl CatalogStore {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog holding exactly `items`.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Creates a catalog holding the default seed products.
    pub fn seeded() -> Self {
        Self::from_items(seed_items())
    }

    /// Restores the catalog through the persistence port.
    ///
    /// - absent record → seed set, persisted immediately
    /// - malformed record → seed set, persisted, recoverable error reported
    /// - readable record → off-shape identifiers regenerated in place
    ///   (monotonic migration: never removes or reorders items), persisted
    ///   back only if something changed
    ///
    /// Persist failures are reported in the [`RestoreReport`] and logged;
    /// the in-memory catalog stays authoritative for the session.
    pub fn restore(source: &dyn CatalogSource) -> (Self, RestoreReport) {
        let mut report = RestoreReport::default();

        let mut store = match source.fetch() {
            Ok(Some(items)) => Self::from_items(items),
            Ok(None) => {
                info!("no stored catalog, seeding defaults");
                report.seeded = true;
                Self::seeded()
            }
            Err(err) => {
                warn!(error = %err, "stored catalog unreadable, falling back to seed set");
                report.seeded = true;
                report.recovered = Some(err.to_string());
                Self::seeded()
            }
        };

        report.migrated_ids = store.migrate_ids();
        if report.migrated_ids > 0 {
            info!(count = report.migrated_ids, "regenerated legacy product identifiers");
        }

        if report.seeded || report.migrated_ids > 0 {
            if let Err(err) = source.persist(store.items()) {
                warn!(error = %err, "unable to persist restored catalog");
                report.persist_warning = Some(err.to_string());
            }
        }

        (store, report)
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Exact-match lookup by identifier.
    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut CatalogItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Case-insensitive substring filter on name or identifier.
    ///
    /// An empty query matches everything. Insertion order is preserved;
    /// out-of-stock items are included so availability stays visible.
    pub fn filter(&self, query: &str) -> Vec<&CatalogItem> {
        let query = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| {
                query.is_empty()
                    || item.name.to_lowercase().contains(&query)
                    || item.id.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Inserts a new product.
    ///
    /// # Errors
    /// - `EmptyIdentifier` / `EmptyName` on blank fields (after trimming)
    /// - `NegativePrice` on a price below zero
    /// - `DuplicateIdentifier` if the identifier is already present
    ///
    /// Negative stock is clamped to zero, not rejected.
    pub fn insert(&mut self, draft: ProductDraft) -> Result<CatalogItem, CatalogError> {
        let id = draft.id.trim().to_string();
        let name = draft.name.trim().to_string();

        if id.is_empty() {
            return Err(CatalogError::EmptyIdentifier);
        }
        if name.is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if draft.price < 0.0 {
            return Err(CatalogError::NegativePrice { price: draft.price });
        }
        if self.find(&id).is_some() {
            return Err(CatalogError::DuplicateIdentifier { id });
        }

        let stock = draft.stock.max(0).min(i64::from(u32::MAX)) as u32;
        let item = CatalogItem::new(id, name, draft.price, stock);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes a product by identifier, returning it.
    pub fn remove(&mut self, id: &str) -> Result<CatalogItem, CatalogError> {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => Ok(self.items.remove(index)),
            None => Err(CatalogError::NotFound { id: id.to_string() }),
        }
    }

    /// Replaces the whole catalog with the edited rows.
    ///
    /// Rows with an empty identifier, empty name, or negative price are
    /// dropped with a logged warning; negative stock is clamped to zero.
    /// Row order becomes the new catalog order.
    pub fn replace_all(&mut self, drafts: Vec<ProductDraft>) -> ReplaceReport {
        let mut report = ReplaceReport::default();
        let mut next = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let id = draft.id.trim().to_string();
            let name = draft.name.trim().to_string();
            if id.is_empty() || name.is_empty() || draft.price < 0.0 {
                warn!(id = %draft.id, name = %draft.name, "dropping invalid catalog row");
                report.dropped += 1;
                continue;
            }
            let stock = draft.stock.max(0).min(i64::from(u32::MAX)) as u32;
            next.push(CatalogItem::new(id, name, draft.price, stock));
            report.kept += 1;
        }

        self.items = next;
        report
    }

    /// Applies a signed stock delta to an item, flooring at zero.
    ///
    /// Returns the stock actually reached.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<u32, CatalogError> {
        match self.find_mut(id) {
            Some(item) => Ok(item.saturating_adjust(delta)),
            None => Err(CatalogError::NotFound { id: id.to_string() }),
        }
    }

    /// Regenerates every identifier that fails the 10-digit shape.
    ///
    /// Items are never removed or reordered. Returns the number of
    /// identifiers regenerated.
    fn migrate_ids(&mut self) -> usize {
        let mut migrated = 0;
        for item in &mut self.items {
            if !product_id::is_well_formed(&item.id) {
                item.id = product_id::generate();
                migrated += 1;
            }
        }
        migrated
    }
}
