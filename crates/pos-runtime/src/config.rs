//! Runtime configuration.

use std::path::PathBuf;

/// Complete runtime configuration.
#[derive(Debug, Clone)]
pub struct PosConfig {
    /// Path of the JSON-file key-value store.
    pub data_path: PathBuf,
    /// Store name shown on invoices.
    pub store_name: String,
    /// Currency symbol for display formatting.
    pub currency: String,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("./smartbill-data.json"),
            store_name: "SmartBill".to_string(),
            currency: "₹".to_string(),
        }
    }
}

impl PosConfig {
    /// Loads configuration from defaults plus environment overrides.
    ///
    /// - `SMARTBILL_DATA_PATH`: storage file location
    /// - `SMARTBILL_STORE_NAME`: invoice header name
    /// - `SMARTBILL_CURRENCY`: currency symbol
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("SMARTBILL_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Ok(name) = std::env::var("SMARTBILL_STORE_NAME") {
            if !name.trim().is_empty() {
                config.store_name = name;
            }
        }
        if let Ok(currency) = std::env::var("SMARTBILL_CURRENCY") {
            if !currency.trim().is_empty() {
                config.currency = currency;
            }
        }

        config
    }
}
