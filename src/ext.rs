//! `value.to_opb58()` and `i64::from_opb58(s)` conveniences over the shared
//! codec.

use crate::codec::Opb58;
use crate::encoders::algorithms::errors::Result;
use num_bigint::BigUint;

/// Types that encode to an order-preserving base-58 string.
pub trait ToOpb58 {
    /// # Errors
    ///
    /// `InvalidArgument` for negative signed values.
    fn to_opb58(&self) -> Result<String>;
}

/// Types that decode from an order-preserving base-58 string.
pub trait FromOpb58: Sized {
    fn from_opb58(encoded: &str) -> Result<Self>;
}

macro_rules! to_opb58_via {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToOpb58 for $ty {
                fn to_opb58(&self) -> Result<String> {
                    Opb58::shared().encode(*self)
                }
            }
        )*
    };
}

to_opb58_via!(u8, u16, i32, i64, u64);

impl ToOpb58 for BigUint {
    fn to_opb58(&self) -> Result<String> {
        Ok(Opb58::shared().encode_biguint(self))
    }
}

impl ToOpb58 for [u8] {
    fn to_opb58(&self) -> Result<String> {
        Ok(Opb58::shared().encode_bytes(self))
    }
}

impl ToOpb58 for Vec<u8> {
    fn to_opb58(&self) -> Result<String> {
        self.as_slice().to_opb58()
    }
}

impl FromOpb58 for i32 {
    fn from_opb58(encoded: &str) -> Result<Self> {
        Opb58::shared().decode_to_i32(encoded)
    }
}

impl FromOpb58 for i64 {
    fn from_opb58(encoded: &str) -> Result<Self> {
        Opb58::shared().decode_to_i64(encoded)
    }
}

impl FromOpb58 for u64 {
    fn from_opb58(encoded: &str) -> Result<Self> {
        Opb58::shared().decode_to_u64(encoded)
    }
}

impl FromOpb58 for BigUint {
    fn from_opb58(encoded: &str) -> Result<Self> {
        Opb58::shared().decode_to_biguint(encoded)
    }
}

impl FromOpb58 for Vec<u8> {
    fn from_opb58(encoded: &str) -> Result<Self> {
        Opb58::shared().decode_to_bytes(encoded)
    }
}
