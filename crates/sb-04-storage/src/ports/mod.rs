//! Ports layer for the Storage subsystem.

pub mod kv;

pub use kv::*;
