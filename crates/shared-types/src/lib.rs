//! # Shared Types Crate
//!
//! This crate contains the domain entities shared by every SmartBill
//! subsystem: the catalog item, the cart line, the persisted billing state,
//! and the product-identifier rules.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **No Redundant State**: `CatalogItem` keeps its `inStock` flag private
//!   and recomputes it on every stock mutation; no code path can set the flag
//!   independently of the stock count.
//! - **Legacy Wire Shape**: Serialized field names stay camelCase so records
//!   written by earlier versions of the application remain readable.

pub mod entities;
pub mod product_id;

pub use entities::*;
