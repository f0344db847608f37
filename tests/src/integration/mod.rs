//! Cross-subsystem integration tests.

mod conservation;
mod persistence;
mod scenarios;
