//! Ports layer for the Catalog Store subsystem.
//!
//! Only an outbound (driven) port exists here: the persistence source the
//! store loads from and saves to. The store itself is the inbound surface.

pub mod outbound;

pub use outbound::*;
