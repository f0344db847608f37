//! # Persisted Records
//!
//! Encode/decode for the two records, with field-by-field defensive
//! validation on the way in. Malformed catalog records fail wholesale
//! (the caller falls back to the seed set); billing records are filtered
//! leniently, dropping only the invalid lines.

use super::errors::StorageError;
use serde_json::Value;
use shared_types::{BillingState, CartLine, CatalogItem, DEFAULT_DISCOUNT_RATE, DEFAULT_TAX_RATE};
use tracing::warn;

/// Key for the catalog record.
pub const CATALOG_KEY: &str = "catalog";

/// Key for the billing-state record.
pub const BILLING_KEY: &str = "smartBillPro_data";

fn malformed(key: &str, reason: impl Into<String>) -> StorageError {
    StorageError::Malformed {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Serializes the full catalog.
pub fn encode_catalog(items: &[CatalogItem]) -> Result<String, StorageError> {
    serde_json::to_string(items).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parses and validates a stored catalog record.
///
/// Every item must carry a string `id`, a string `name`, a finite
/// non-negative-capable number `price`, and a non-negative integer
/// `stock`. The stored `inStock` flag is ignored; items are rebuilt so
/// the flag is recomputed from `stock`.
pub fn decode_catalog(raw: &str) -> Result<Vec<CatalogItem>, StorageError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| malformed(CATALOG_KEY, format!("invalid JSON: {err}")))?;

    let entries = value
        .as_array()
        .ok_or_else(|| malformed(CATALOG_KEY, "not a list"))?;

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let id = entry
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(CATALOG_KEY, format!("item {index}: missing id")))?;
        let name = entry
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(CATALOG_KEY, format!("item {index}: missing name")))?;
        let price = entry
            .get("price")
            .and_then(Value::as_f64)
            .filter(|price| price.is_finite())
            .ok_or_else(|| malformed(CATALOG_KEY, format!("item {index}: missing price")))?;
        let stock = entry
            .get("stock")
            .and_then(Value::as_u64)
            .ok_or_else(|| {
                malformed(CATALOG_KEY, format!("item {index}: missing or negative stock"))
            })?;
        let stock = u32::try_from(stock)
            .map_err(|_| malformed(CATALOG_KEY, format!("item {index}: stock out of range")))?;

        items.push(CatalogItem::new(id.to_string(), name.to_string(), price, stock));
    }

    Ok(items)
}

/// Serializes the billing state.
pub fn encode_billing(state: &BillingState) -> Result<String, StorageError> {
    serde_json::to_string(state).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parses a stored billing record, leniently.
///
/// - top-level not a JSON object → `Malformed` (caller starts fresh)
/// - `products` absent or not an array → empty cart
/// - lines missing a name, with a non-numeric price, or with a
///   non-positive/non-integer quantity are dropped with a warning
/// - a missing `id` restores as `None` (legacy records)
/// - rates outside `[0, 100]` or non-numeric fall back to 0 / 18
pub fn decode_billing(raw: &str) -> Result<BillingState, StorageError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|err| malformed(BILLING_KEY, format!("invalid JSON: {err}")))?;

    let record = value
        .as_object()
        .ok_or_else(|| malformed(BILLING_KEY, "not an object"))?;

    let mut lines = Vec::new();
    if let Some(products) = record.get("products") {
        match products.as_array() {
            Some(entries) => {
                for entry in entries {
                    match decode_line(entry) {
                        Some(line) => lines.push(line),
                        None => warn!(line = %entry, "dropping invalid billing line"),
                    }
                }
            }
            None => warn!("billing record 'products' is not an array, restoring empty cart"),
        }
    }

    Ok(BillingState {
        lines,
        discount_rate: stored_rate(record.get("discountRate"), DEFAULT_DISCOUNT_RATE),
        tax_rate: stored_rate(record.get("taxRate"), DEFAULT_TAX_RATE),
    })
}

fn decode_line(entry: &Value) -> Option<CartLine> {
    let name = entry.get("name")?.as_str()?;
    if name.is_empty() {
        return None;
    }
    let price = entry.get("price")?.as_f64().filter(|price| price.is_finite())?;
    let quantity = entry.get("quantity")?.as_u64().filter(|quantity| *quantity > 0)?;
    let quantity = u32::try_from(quantity).ok()?;
    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(CartLine {
        id,
        name: name.to_string(),
        price,
        quantity,
    })
}

fn stored_rate(value: Option<&Value>, fallback: f64) -> f64 {
    match value.and_then(Value::as_f64) {
        Some(rate) if rate.is_finite() && (0.0..=100.0).contains(&rate) => rate,
        _ => fallback,
    }
}
