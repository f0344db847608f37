//! # Totals Calculator Subsystem
//!
//! Pure derivation of invoice totals from cart lines plus the two rate
//! inputs. No side effects, no stored state.
//!
//! ## Calculation Order (load-bearing)
//!
//! ```text
//! subtotal        = Σ line.quantity * line.price
//! discountAmount  = subtotal * discountRate / 100
//! discountedTotal = subtotal - discountAmount
//! taxAmount       = discountedTotal * taxRate / 100   ← tax AFTER discount
//! finalTotal      = discountedTotal + taxAmount
//! ```
//!
//! Tax is computed on the post-discount amount, never on the raw subtotal.
//! All values are full precision; rounding to 2 decimal places happens
//! only through [`InvoiceTotals::rounded`] at presentation time.

pub mod domain;

pub use domain::*;
