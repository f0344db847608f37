//! Billing-state persistence over the key-value port.

use sb_04_storage::{
    decode_billing, encode_billing, KeyValueStore, StorageError, BILLING_KEY,
};
use shared_types::BillingState;
use std::sync::Arc;
use tracing::warn;

/// Loads and saves the billing record.
pub struct BillingRecordStore {
    store: Arc<dyn KeyValueStore>,
}

impl BillingRecordStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Restores the billing state.
    ///
    /// A missing record is a fresh bill. A corrupt record is removed from
    /// storage (so the next save starts clean) and restores a fresh bill
    /// with a warning. A store read failure restores a fresh bill too;
    /// persistence problems never block the session.
    pub fn load(&self) -> BillingState {
        let raw = match self.store.get(BILLING_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return BillingState::default(),
            Err(err) => {
                warn!(error = %err, "unable to read billing record, starting fresh bill");
                return BillingState::default();
            }
        };

        match decode_billing(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "billing record corrupt, clearing and starting fresh bill");
                if let Err(err) = self.store.remove(BILLING_KEY) {
                    warn!(error = %err, "unable to clear corrupt billing record");
                }
                BillingState::default()
            }
        }
    }

    /// Writes the full billing state, replacing the previous record.
    pub fn save(&self, state: &BillingState) -> Result<(), StorageError> {
        let raw = encode_billing(state)?;
        self.store.set(BILLING_KEY, &raw)
    }

    /// Removes the billing record entirely (clear-bill semantics).
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(BILLING_KEY)
    }
}
