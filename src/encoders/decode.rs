//! Decode dispatch: boundary checks pick 32-bit, 64-bit or arbitrary-precision
//! arithmetic before any digit is parsed.

use super::algorithms::errors::{Opb58Error, Result};
use super::algorithms::{fixed, math};
use crate::core::alphabet::digit_value;
use crate::core::boundary::{self, I32_MAX, I64_MAX, U64_MAX};
use num_bigint::BigUint;
use num_traits::ToPrimitive;

const I32_TARGET: &str = "signed 32-bit";
const I64_TARGET: &str = "signed 64-bit";
const U64_TARGET: &str = "unsigned 64-bit";

/// The empty string passes the fits-test and decodes to zero.
pub fn decode_i32(input: &str) -> Result<i32> {
    if !boundary::fits_i32(input) {
        return Err(oversized(input, I32_TARGET, I32_MAX));
    }
    fixed::accumulate(input, I32_TARGET, I32_MAX)
}

pub fn decode_i64(input: &str) -> Result<i64> {
    if !boundary::fits_i64(input) {
        return Err(oversized(input, I64_TARGET, I64_MAX));
    }
    fixed::accumulate(input, I64_TARGET, I64_MAX)
}

pub fn decode_u64(input: &str) -> Result<u64> {
    if boundary::fits_i64(input) {
        return fixed::accumulate(input, U64_TARGET, U64_MAX);
    }
    math::decode_biguint(input)?
        .to_u64()
        .ok_or_else(|| Opb58Error::overflow(input, U64_TARGET, U64_MAX))
}

/// Decodes to the minimal big-endian unsigned bytes of the magnitude.
///
/// Zero decodes to `[0]`; the empty string decodes to no bytes.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if boundary::fits_i32(input) {
        let value: i32 = fixed::accumulate(input, I32_TARGET, I32_MAX)?;
        return Ok(minimal_be(&value.to_be_bytes()));
    }
    if boundary::fits_i64(input) {
        let value: i64 = fixed::accumulate(input, I64_TARGET, I64_MAX)?;
        return Ok(minimal_be(&value.to_be_bytes()));
    }
    Ok(math::decode_biguint(input)?.to_bytes_be())
}

pub fn decode_biguint(input: &str) -> Result<BigUint> {
    if input.is_empty() {
        return Ok(BigUint::default());
    }
    if boundary::fits_i64(input) {
        let value: i64 = fixed::accumulate(input, I64_TARGET, I64_MAX)?;
        return Ok(BigUint::from(value as u64));
    }
    math::decode_biguint(input)
}

/// A string that failed the fits-test is an overflow only if every symbol is
/// valid; otherwise the bad symbol is reported.
fn oversized(input: &str, target: &'static str, max: &'static str) -> Opb58Error {
    match input.bytes().position(|b| digit_value(b).is_none()) {
        Some(position) => Opb58Error::invalid_character(input, position),
        None => Opb58Error::overflow(input, target, max),
    }
}

fn minimal_be(bytes: &[u8]) -> Vec<u8> {
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len().saturating_sub(1));
    bytes[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_i32_boundary() {
        assert_eq!(decode_i32("3FkQ47").unwrap(), i32::MAX);
        let err = decode_i32("3FkQ47z").unwrap_err();
        assert!(err.is_overflow());
        assert!(decode_i32("3FkQ48").unwrap_err().is_overflow());
    }

    #[test]
    fn test_decode_i64_boundary() {
        assert_eq!(decode_i64("MPk5mJp7qEB").unwrap(), i64::MAX);
        assert!(decode_i64("MPk5mJp7qEBz").unwrap_err().is_overflow());
    }

    #[test]
    fn test_oversized_with_bad_symbol_reports_symbol() {
        let err = decode_i32("3FkQ47zzO").unwrap_err();
        assert_eq!(err, Opb58Error::invalid_character("3FkQ47zzO", 8));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_i32("").unwrap(), 0);
        assert_eq!(decode_i64("").unwrap(), 0);
        assert_eq!(decode_u64("").unwrap(), 0);
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_biguint("").unwrap(), BigUint::default());
    }

    #[test]
    fn test_decode_bytes_minimal() {
        assert_eq!(decode_bytes("0").unwrap(), vec![0]);
        assert_eq!(decode_bytes("000").unwrap(), vec![0]);
        assert_eq!(decode_bytes("4P").unwrap(), vec![0xFF]);
        assert_eq!(decode_bytes("4Q").unwrap(), vec![0x01, 0x00]);
        assert_eq!(decode_bytes("3FkQ47").unwrap(), vec![0x7F, 0xFF, 0xFF, 0xFF]);
        assert_eq!(decode_bytes("3FkQ48").unwrap(), vec![0x80, 0x00, 0x00, 0x00]);
        assert_eq!(decode_bytes("ipWBYdcFeUP").unwrap(), vec![0xFF; 8]);
        assert_eq!(
            decode_bytes("3GTtaGgM1SjpQ").unwrap(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }

    #[test]
    fn test_decode_u64() {
        assert_eq!(decode_u64("4Q").unwrap(), 256);
        assert_eq!(decode_u64("ipWBYdcFeUP").unwrap(), u64::MAX);
        assert!(decode_u64("ipWBYdcFeUQ").unwrap_err().is_overflow());
    }

    #[test]
    fn test_decode_rejects_unknown_symbol() {
        for input in ["I", "3Fk-47", "MPk5mJp7qEBzzzz_", "é"] {
            assert!(decode_bytes(input).unwrap_err().is_invalid_argument(), "{input}");
        }
    }
}
