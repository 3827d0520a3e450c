//! Fixed-width radix conversion for magnitudes that fit machine integers.

use super::errors::{Opb58Error, Result};
use crate::core::alphabet::{BASE, digit_value, symbol};
use num_integer::Integer;
use num_traits::PrimInt;

/// Longest encoding of a `u64`; 58^11 > 2^64.
pub const MAX_U64_DIGITS: usize = 11;

/// Encodes a non-zero `value` in 64-bit arithmetic.
///
/// Zero has no digits on this path; the dispatcher serves it from the byte
/// cache.
pub fn encode_u64(mut value: u64) -> String {
    debug_assert_ne!(value, 0);
    let base = BASE as u64;
    let mut digits = [0u8; MAX_U64_DIGITS];
    let mut pos = MAX_U64_DIGITS;

    while value >= base {
        let (quotient, remainder) = value.div_rem(&base);
        pos -= 1;
        digits[pos] = symbol(remainder as u8);
        value = quotient;
    }
    if value > 0 {
        pos -= 1;
        digits[pos] = symbol(value as u8);
    }

    digits[pos..].iter().map(|&b| b as char).collect()
}

/// Decodes `input` by repeated multiply-add in `T`.
///
/// Every step is checked: an unknown symbol is an `InvalidCharacter` error and
/// leaving the range of `T` is an `Overflow`, so nothing wraps silently even
/// when the caller skipped the fits-test.
pub fn accumulate<T>(input: &str, target: &'static str, max: &'static str) -> Result<T>
where
    T: PrimInt + From<u8>,
{
    let base = <T as From<u8>>::from(BASE as u8);
    input
        .bytes()
        .enumerate()
        .try_fold(T::zero(), |acc, (position, b)| {
            let digit = digit_value(b)
                .ok_or_else(|| Opb58Error::invalid_character(input, position))?;
            acc.checked_mul(&base)
                .and_then(|shifted| shifted.checked_add(&<T as From<u8>>::from(digit)))
                .ok_or_else(|| Opb58Error::overflow(input, target, max))
        })
}
