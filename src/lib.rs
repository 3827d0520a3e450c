//! Order-preserving base-58 numerals.
//!
//! Non-negative integers and big-endian byte magnitudes are written in a
//! 58-symbol alphabet listed in ascending ASCII order. Encodings are
//! collision-free, carry no leading zero digit, and encodings of equal length
//! sort the same way as the numbers they represent.
//!
//! ```
//! assert_eq!(opb58::encode_integer(0).unwrap(), "0");
//! assert_eq!(opb58::encode_integer(58).unwrap(), "10");
//! assert_eq!(opb58::encode_bytes(&[0x00, 0xFF]), "4P");
//! assert_eq!(opb58::decode_to_i32("3FkQ47").unwrap(), i32::MAX);
//! assert!(!opb58::fits_i32("3FkQ47z"));
//! ```

pub mod codec;
pub mod core;
pub mod encoders;
pub mod ext;
pub mod id;
pub mod prelude;

pub use codec::Opb58;
pub use crate::core::alphabet::{ALPHABET, BASE};
pub use crate::core::boundary::{I32_MAX, I64_MAX, U64_MAX};
pub use crate::core::config::{DecodeWidth, InputFormat, Opb58Config, OutputFormat, Settings};
pub use encoders::Magnitude;
pub use encoders::algorithms::{Opb58Error, Result};
pub use ext::{FromOpb58, ToOpb58};
pub use id::Opb58Id;

use num_bigint::BigUint;

/// Encodes a non-negative integer.
///
/// # Errors
///
/// `InvalidArgument` if `value` is negative.
pub fn encode_integer(value: i64) -> Result<String> {
    Opb58::shared().encode_integer(value)
}

/// Encodes big-endian unsigned bytes; leading zero bytes are ignored.
pub fn encode_bytes(bytes: &[u8]) -> String {
    Opb58::shared().encode_bytes(bytes)
}

pub fn encode_biguint(value: &BigUint) -> String {
    Opb58::shared().encode_biguint(value)
}

pub fn decode_to_i32(encoded: &str) -> Result<i32> {
    Opb58::shared().decode_to_i32(encoded)
}

pub fn decode_to_i64(encoded: &str) -> Result<i64> {
    Opb58::shared().decode_to_i64(encoded)
}

/// Decodes to the minimal big-endian unsigned bytes of the magnitude.
pub fn decode_to_bytes(encoded: &str) -> Result<Vec<u8>> {
    Opb58::shared().decode_to_bytes(encoded)
}

pub fn decode_to_biguint(encoded: &str) -> Result<BigUint> {
    Opb58::shared().decode_to_biguint(encoded)
}

/// True if `encoded` decodes to at most `i32::MAX`. Nothing is parsed.
pub fn fits_i32(encoded: &str) -> bool {
    crate::core::boundary::fits_i32(encoded)
}

/// True if `encoded` decodes to at most `i64::MAX`. Nothing is parsed.
pub fn fits_i64(encoded: &str) -> bool {
    crate::core::boundary::fits_i64(encoded)
}
