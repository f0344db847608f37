//! # Storage Subsystem
//!
//! The persistence adapter: a key-value port with adapters, plus the
//! defensive codecs for the two persisted records.
//!
//! ## Persisted Layout (legacy wire shape)
//!
//! | Key | Record |
//! |-----|--------|
//! | `catalog` | JSON array of `{id, name, price, stock, inStock}` |
//! | `smartBillPro_data` | JSON object `{products, discountRate, taxRate}` |
//!
//! ## Load Policy
//!
//! Decoding validates shape defensively (array-ness, per-field presence
//! and type) and discards-and-reports on mismatch rather than partially
//! trusting malformed data. The stored `inStock` flag is ignored and
//! recomputed from `stock`. Billing lines are filtered leniently (invalid
//! lines dropped with a warning); rates are clamped to `[0, 100]` with
//! defaults 0 (discount) / 18 (tax).
//!
//! ## Write Policy
//!
//! A failed write (e.g. quota exhaustion) is a reported, non-fatal error:
//! callers keep their in-memory state authoritative for the session.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! adapters/ - MemoryStore, JsonFileStore, QuotaExceededStore
//!     ↑ implements ↑
//! ports/kv.rs - KeyValueStore trait
//!     ↑ uses ↑
//! domain/records.rs - record keys + encode/decode codecs
//! domain/errors.rs  - StorageError enum
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
