use crate::encoders::algorithms::math;
use num_bigint::BigUint;

/// Precomputed encodings of every single-byte value.
///
/// Built once by running the general arbitrary-precision encoder over
/// `0..=255`, then read-only.
#[derive(Debug, Clone)]
pub struct ByteCache {
    entries: [Box<str>; 256],
}

impl ByteCache {
    pub fn build() -> Self {
        let entries = std::array::from_fn(|byte| {
            math::encode_biguint(&BigUint::from(byte as u8)).into_boxed_str()
        });
        tracing::debug!(entries = 256, "built byte cache");
        ByteCache { entries }
    }

    /// Returns the encoding of `byte`.
    #[inline]
    pub fn get(&self, byte: u8) -> &str {
        &self.entries[byte as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(byte, encoded)| (byte as u8, &**encoded))
    }
}
