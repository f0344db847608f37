//! Ports layer for the Cart Ledger subsystem.
//!
//! Outbound (Driven) port: the catalog stock dependency the ledger
//! reconciles against. The runtime provides the adapter over the real
//! Catalog Store.

pub mod outbound;

pub use outbound::*;
