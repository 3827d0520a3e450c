use super::errors::{Opb58Error, Result};
use crate::core::alphabet::{BASE, ZERO, digit_value, symbol};
use num_bigint::BigUint;
use num_traits::Zero;

/// Encodes an arbitrary-precision magnitude, most significant digit first.
pub fn encode_biguint(value: &BigUint) -> String {
    if value.is_zero() {
        return ZERO.to_string();
    }
    tracing::trace!(bits = value.bits(), "arbitrary-precision encode");

    value
        .to_radix_be(BASE as u32)
        .into_iter()
        .map(|digit| symbol(digit) as char)
        .collect()
}

/// Decodes `input` into an arbitrary-precision magnitude.
pub fn decode_biguint(input: &str) -> Result<BigUint> {
    tracing::trace!(len = input.len(), "arbitrary-precision decode");

    let digits = input
        .bytes()
        .enumerate()
        .map(|(position, b)| {
            digit_value(b).ok_or_else(|| Opb58Error::invalid_character(input, position))
        })
        .collect::<Result<Vec<u8>>>()?;

    BigUint::from_radix_be(&digits, BASE as u32).ok_or_else(|| {
        Opb58Error::invalid_argument(format!("\"{}\" is not a base-58 numeral", input))
    })
}
