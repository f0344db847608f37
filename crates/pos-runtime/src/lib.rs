//! # SmartBill POS Runtime
//!
//! The wiring layer for the billing application: owns the live catalog and
//! cart, connects them through port adapters, mirrors both to storage after
//! every mutation, and feeds the rendering collaborator.
//!
//! ## Component Wiring
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │ main.rs - interactive console (confirmation prompts live here)│
//! └───────────────────────────────────────────────────────────────┘
//!                              │ drives
//! ┌───────────────────────────────────────────────────────────────┐
//! │ session.rs - BillingSession                                   │
//! │   CatalogStore ←─ CatalogStockAdapter ─→ CartLedger           │
//! │   persist after every mutation; totals via sb-03-totals;      │
//! │   ViewSnapshot pushed to the RenderSink                       │
//! └───────────────────────────────────────────────────────────────┘
//!                              │ reads/writes
//! ┌───────────────────────────────────────────────────────────────┐
//! │ adapters/ - StoredCatalogSource, BillingRecordStore over the  │
//! │             KeyValueStore port (JsonFileStore in production)  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging
//! 2. Load configuration (defaults + environment overrides)
//! 3. Open the JSON-file key-value store
//! 4. Restore the catalog (seed / migrate / recover as needed)
//! 5. Restore the billing state (fresh bill on corrupt record)
//! 6. Initial render

pub mod adapters;
pub mod config;
pub mod invoice;
pub mod render;
pub mod session;

pub use config::PosConfig;
pub use render::{ConsoleRenderer, NullRenderer, RenderSink, ViewSnapshot};
pub use session::{BillingSession, Committed};
