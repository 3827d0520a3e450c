//! Encoded forms of the largest signed 32- and 64-bit values.
//!
//! Whether a string fits a fixed-width integer is decided by length first and
//! then by plain byte comparison against these constants, without parsing.
//! This is sound because the alphabet is in ascending code order and
//! non-zero encodings carry no leading zero digit.

use std::cmp::Ordering;

/// Encoding of `i32::MAX`.
pub const I32_MAX: &str = "3FkQ47";

/// Encoding of `i64::MAX`.
pub const I64_MAX: &str = "MPk5mJp7qEB";

/// Encoding of `u64::MAX`. Only used to name the limit in errors; unsigned
/// decoding past [`I64_MAX`] goes through arbitrary precision.
pub const U64_MAX: &str = "ipWBYdcFeUP";

#[inline]
fn fits(encoded: &str, boundary: &str) -> bool {
    match encoded.len().cmp(&boundary.len()) {
        Ordering::Less => true,
        Ordering::Equal => encoded.as_bytes() <= boundary.as_bytes(),
        Ordering::Greater => false,
    }
}

/// Returns `true` if `encoded` is no greater than [`I32_MAX`].
#[inline]
pub fn fits_i32(encoded: &str) -> bool {
    fits(encoded, I32_MAX)
}

/// Returns `true` if `encoded` is no greater than [`I64_MAX`].
#[inline]
pub fn fits_i64(encoded: &str) -> bool {
    fits(encoded, I64_MAX)
}
