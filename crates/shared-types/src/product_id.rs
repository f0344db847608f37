//! Product identifier rules.
//!
//! Identifiers are ten ASCII digits. Generated identifiers start with a
//! non-zero digit so the value reads as a proper 10-digit number. Catalog
//! load migrates anything else (legacy `PROD-` prefixes, wrong length,
//! non-digits) by regenerating in place.

use rand::Rng;

/// Length of a well-formed product identifier.
pub const PRODUCT_ID_LEN: usize = 10;

/// Returns true if `id` has the canonical 10-digit shape.
///
/// Accepts a leading zero: only *generation* guarantees a non-zero first
/// digit; validation is purely about length and digit-ness.
pub fn is_well_formed(id: &str) -> bool {
    id.len() == PRODUCT_ID_LEN && id.bytes().all(|b| b.is_ascii_digit())
}

/// Generates a random 10-digit identifier with a non-zero first digit.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = rng.gen_range(1..=9u32);
    let rest: u64 = rng.gen_range(0..1_000_000_000);
    format!("{first}{rest:09}")
}

/// Generates a random 10-digit identifier using the thread-local RNG.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}
