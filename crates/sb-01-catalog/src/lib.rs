//! # Catalog Store Subsystem
//!
//! Owns the set of purchasable products and their stock counts.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Stock never negative | `domain/store.rs` - every mutation goes through `CatalogItem::saturating_adjust` / clamped drafts |
//! | `inStock == (stock > 0)` | `shared-types` - flag is private and recomputed on every stock write |
//! | Identifiers unique on insert | `domain/store.rs` - `insert()` duplicate check |
//! | Load never removes or reorders items | `domain/store.rs` - `migrate_ids()` regenerates in place |
//!
//! ## Load Policy
//!
//! `CatalogStore::restore` reads through the outbound [`ports::CatalogSource`]
//! port. An absent record seeds the default products; a malformed record
//! falls back to the seed set and reports the recoverable error; a readable
//! record has any off-shape identifier regenerated in place and is saved
//! back immediately. Persist failures never abort the session: the
//! in-memory catalog stays authoritative.
//!
//! ## Module Structure (Hexagonal Architecture)
//!
//! ```text
//! ports/outbound.rs - CatalogSource trait (persistence dependency)
//!          ↑ uses ↑
//! domain/store.rs   - CatalogStore with validation and stock arithmetic
//! domain/seed.rs    - default product set
//! domain/errors.rs  - CatalogError enum
//! ```

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
