//! Port implementations connecting subsystems.
//!
//! Cross-crate adapters live here, the way the runtime owns the glue
//! between subsystems: the catalog's persistence source and the cart's
//! stock provider are both satisfied from this module.

pub mod billing;
pub mod catalog_source;
pub mod stock;

pub use billing::*;
pub use catalog_source::*;
pub use stock::*;
