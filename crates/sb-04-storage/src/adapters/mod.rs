//! Adapters implementing the key-value port.

pub mod file;
pub mod memory;
pub mod quota;

pub use file::*;
pub use memory::*;
pub use quota::*;
