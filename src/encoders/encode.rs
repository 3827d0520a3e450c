//! Encode dispatch: picks the cheapest correct conversion for the input width.
//!
//! Every branch computes the same thing, "divide by 58 until nothing is left,
//! least significant digit first", so the output never depends on which
//! branch ran.

use super::algorithms::errors::{Opb58Error, Result};
use super::algorithms::{fixed, math};
use super::magnitude::Magnitude;
use crate::core::cache::ByteCache;
use num_bigint::BigUint;
use num_traits::ToPrimitive;

pub fn encode_magnitude(cache: &ByteCache, magnitude: Magnitude<'_>) -> Result<String> {
    match magnitude {
        Magnitude::Byte(value) => Ok(cache.get(value).to_owned()),
        Magnitude::Short16(value) => Ok(encode_u64(cache, u64::from(value))),
        Magnitude::Int32(value) => encode_i64(cache, i64::from(value)),
        Magnitude::Int64(value) => encode_i64(cache, value),
        Magnitude::Uint64(value) => Ok(encode_u64(cache, value)),
        Magnitude::BigInt(value) => Ok(encode_biguint(cache, value)),
        Magnitude::Bytes(bytes) => Ok(encode_bytes(cache, bytes)),
    }
}

/// Rejects negative input; everything else goes through [`encode_u64`].
pub fn encode_i64(cache: &ByteCache, value: i64) -> Result<String> {
    let magnitude = u64::try_from(value).map_err(|_| Opb58Error::negative(value))?;
    Ok(encode_u64(cache, magnitude))
}

pub fn encode_u64(cache: &ByteCache, value: u64) -> String {
    match u8::try_from(value) {
        Ok(byte) => cache.get(byte).to_owned(),
        Err(_) => fixed::encode_u64(value),
    }
}

pub fn encode_biguint(cache: &ByteCache, value: &BigUint) -> String {
    // Anything up to 64 bits wide takes the machine-word path.
    match value.to_u64() {
        Some(narrow) => encode_u64(cache, narrow),
        None => math::encode_biguint(value),
    }
}

/// Encodes `bytes` as a big-endian unsigned magnitude.
///
/// Leading zero bytes carry no magnitude and are skipped; an all-zero input
/// encodes like the single byte `0`, and an empty one to the empty string.
pub fn encode_bytes(cache: &ByteCache, bytes: &[u8]) -> String {
    let significant = match bytes.iter().position(|&b| b != 0) {
        Some(start) => &bytes[start..],
        None if bytes.is_empty() => return String::new(),
        None => return cache.get(0).to_owned(),
    };

    match *significant {
        [byte] => cache.get(byte).to_owned(),
        [hi, lo] => fixed::encode_u64(u64::from(u16::from_be_bytes([hi, lo]))),
        [b0, b1, b2] => fixed::encode_u64(u64::from(u32::from_be_bytes([0, b0, b1, b2]))),
        _ if significant.len() < 8 => {
            let mut word = [0u8; 8];
            word[8 - significant.len()..].copy_from_slice(significant);
            fixed::encode_u64(u64::from_be_bytes(word))
        }
        _ => math::encode_biguint(&BigUint::from_bytes_be(significant)),
    }
}
