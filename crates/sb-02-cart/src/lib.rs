//! # Cart Ledger Subsystem
//!
//! The inventory-linked invoice ledger: every cart mutation atomically
//! adjusts catalog stock through the outbound [`ports::StockProvider`] port.
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Conservation: `stock + Σ(cart qty for item)` is constant across add/edit/remove | `domain/ledger.rs` - every mutation pairs a line change with the mirrored stock delta |
//! | Stock never negative | `StockProvider::adjust_stock` floors at zero |
//! | Line quantity ≥ 1 | `domain/ledger.rs` - non-positive quantities rejected on add and edit |
//! | All-or-nothing mutations | `domain/ledger.rs` - validation completes before any state is touched |
//! | Line order is insertion order | backing `Vec`, never re-sorted |
//!
//! ## Allocation State Machine (per line, relative to its catalog item)
//!
//! ```text
//! [UNALLOCATED] ──add──→ [ALLOCATED(qty)] ──remove/clear──→ [UNALLOCATED]
//!                              │    ↑
//!                              └────┘ edit (stock delta applied)
//! ```
//!
//! No other transitions exist; a line can never exist with quantity ≤ 0.
//!
//! ## Add vs Edit Asymmetry
//!
//! `add_item` *rejects* a request that would exceed the available pool
//! (free stock plus this line's existing reservation) with
//! `InsufficientStock` carrying the computed ceiling; `edit_quantity`
//! *clamps* to the ceiling and surfaces the clamp in its receipt. Both
//! behaviors are deliberate and covered by tests.
//!
//! ## Orphaned Lines
//!
//! A line whose catalog item was deleted (or that was restored from a
//! legacy record without an identifier) can still be edited (its quantity
//! changes with no stock reconciliation) and its reservation is dropped,
//! not restored, on remove/clear. The drop is observable through
//! `ClearReceipt::dropped`.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
