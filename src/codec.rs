use crate::core::boundary;
use crate::core::cache::ByteCache;
use crate::encoders::algorithms::errors::{Opb58Error, Result};
use crate::encoders::{Magnitude, decode, encode};
use num_bigint::BigUint;
use std::sync::OnceLock;

/// The order-preserving base-58 codec.
///
/// Holds the single-byte cache; the digit tables are compile-time constants.
/// After construction nothing is mutated, so a shared reference can be used
/// from any number of threads.
///
/// # Example
///
/// ```
/// use opb58::Opb58;
///
/// let codec = Opb58::shared();
/// assert_eq!(codec.encode_integer(58).unwrap(), "10");
/// assert_eq!(codec.decode_to_i64("10").unwrap(), 58);
/// ```
#[derive(Debug, Clone)]
pub struct Opb58 {
    cache: ByteCache,
}

impl Default for Opb58 {
    fn default() -> Self {
        Self::new()
    }
}

impl Opb58 {
    /// Builds the tables.
    pub fn new() -> Self {
        Opb58 {
            cache: ByteCache::build(),
        }
    }

    /// Process-wide instance, built on first use.
    pub fn shared() -> &'static Opb58 {
        static SHARED: OnceLock<Opb58> = OnceLock::new();
        SHARED.get_or_init(Opb58::new)
    }

    /// Encodes a non-negative integer.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `value` is negative.
    pub fn encode_integer(&self, value: i64) -> Result<String> {
        encode::encode_i64(&self.cache, value)
    }

    /// Encodes a non-negative 32-bit integer.
    pub fn encode_i32(&self, value: i32) -> Result<String> {
        encode::encode_i64(&self.cache, i64::from(value))
    }

    pub fn encode_u64(&self, value: u64) -> String {
        encode::encode_u64(&self.cache, value)
    }

    pub fn encode_biguint(&self, value: &BigUint) -> String {
        encode::encode_biguint(&self.cache, value)
    }

    /// Encodes big-endian unsigned bytes. Empty input gives an empty string.
    pub fn encode_bytes(&self, bytes: &[u8]) -> String {
        encode::encode_bytes(&self.cache, bytes)
    }

    /// Encodes `len` bytes of `bytes` starting at `offset`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the range runs past the end of `bytes`.
    pub fn encode_bytes_range(&self, bytes: &[u8], offset: usize, len: usize) -> Result<String> {
        let range = offset
            .checked_add(len)
            .and_then(|end| bytes.get(offset..end))
            .ok_or_else(|| {
                Opb58Error::invalid_argument(format!(
                    "offset {} with length {} is out of bounds for {} bytes",
                    offset,
                    len,
                    bytes.len()
                ))
            })?;
        Ok(self.encode_bytes(range))
    }

    /// Encodes any tagged magnitude.
    pub fn encode<'a>(&self, magnitude: impl Into<Magnitude<'a>>) -> Result<String> {
        encode::encode_magnitude(&self.cache, magnitude.into())
    }

    /// # Errors
    ///
    /// `Overflow` past `i32::MAX`, `InvalidArgument` on unknown symbols.
    /// The empty string decodes to zero.
    pub fn decode_to_i32(&self, encoded: &str) -> Result<i32> {
        decode::decode_i32(encoded)
    }

    /// # Errors
    ///
    /// `Overflow` past `i64::MAX`, `InvalidArgument` on unknown symbols.
    /// The empty string decodes to zero.
    pub fn decode_to_i64(&self, encoded: &str) -> Result<i64> {
        decode::decode_i64(encoded)
    }

    pub fn decode_to_u64(&self, encoded: &str) -> Result<u64> {
        decode::decode_u64(encoded)
    }

    /// Decodes to the minimal big-endian unsigned bytes of the magnitude.
    pub fn decode_to_bytes(&self, encoded: &str) -> Result<Vec<u8>> {
        decode::decode_bytes(encoded)
    }

    pub fn decode_to_biguint(&self, encoded: &str) -> Result<BigUint> {
        decode::decode_biguint(encoded)
    }

    pub fn fits_i32(&self, encoded: &str) -> bool {
        boundary::fits_i32(encoded)
    }

    pub fn fits_i64(&self, encoded: &str) -> bool {
        boundary::fits_i64(encoded)
    }

    /// The cached encoding of a single byte.
    pub fn cached(&self, byte: u8) -> &str {
        self.cache.get(byte)
    }

    pub fn cache(&self) -> &ByteCache {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_is_singleton() {
        assert!(std::ptr::eq(Opb58::shared(), Opb58::shared()));
    }

    #[test]
    fn test_shared_from_many_threads() {
        let handles: Vec<_> = (0..8u64)
            .map(|i| {
                std::thread::spawn(move || {
                    let value = 1_000_000 * (i + 1);
                    let encoded = Opb58::shared().encode_u64(value);
                    Opb58::shared().decode_to_u64(&encoded).unwrap() == value
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_encode_bytes_range() {
        let codec = Opb58::new();
        let data = [0xAA, 0x00, 0xFF, 0xBB];
        assert_eq!(codec.encode_bytes_range(&data, 1, 2).unwrap(), "4P");
        assert_eq!(codec.encode_bytes_range(&data, 4, 0).unwrap(), "");
        assert!(codec.encode_bytes_range(&data, 3, 2).is_err());
        assert!(codec.encode_bytes_range(&data, usize::MAX, 2).is_err());
    }

    #[test]
    fn test_encode_generic() {
        let codec = Opb58::new();
        assert_eq!(codec.encode(255u8).unwrap(), "4P");
        assert_eq!(codec.encode(&[0u8, 0xFF]).unwrap(), "4P");
        assert_eq!(codec.encode(i32::MAX).unwrap(), "3FkQ47");
        assert!(codec.encode(-1i64).is_err());
    }

    #[test]
    fn test_i32_encode_matches_i64() {
        let codec = Opb58::new();
        for v in [0, 1, 57, 58, 255, 256, 65_536, i32::MAX] {
            assert_eq!(codec.encode_i32(v).unwrap(), codec.encode_integer(i64::from(v)).unwrap());
        }
        assert!(codec.encode_i32(i32::MIN).is_err());
    }
}
