use num_bigint::BigUint;

/// An encodable value, tagged by the width it arrived in.
///
/// The width picks the cheapest correct conversion; every variant encodes to
/// the same string for the same magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude<'a> {
    Byte(u8),
    Short16(u16),
    Int32(i32),
    Int64(i64),
    Uint64(u64),
    BigInt(&'a BigUint),
    /// Big-endian unsigned bytes, most significant first.
    Bytes(&'a [u8]),
}

impl From<u8> for Magnitude<'_> {
    fn from(value: u8) -> Self {
        Magnitude::Byte(value)
    }
}

impl From<u16> for Magnitude<'_> {
    fn from(value: u16) -> Self {
        Magnitude::Short16(value)
    }
}

impl From<i32> for Magnitude<'_> {
    fn from(value: i32) -> Self {
        Magnitude::Int32(value)
    }
}

impl From<i64> for Magnitude<'_> {
    fn from(value: i64) -> Self {
        Magnitude::Int64(value)
    }
}

impl From<u64> for Magnitude<'_> {
    fn from(value: u64) -> Self {
        Magnitude::Uint64(value)
    }
}

impl<'a> From<&'a BigUint> for Magnitude<'a> {
    fn from(value: &'a BigUint) -> Self {
        Magnitude::BigInt(value)
    }
}

impl<'a> From<&'a [u8]> for Magnitude<'a> {
    fn from(value: &'a [u8]) -> Self {
        Magnitude::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Magnitude<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Magnitude::Bytes(value)
    }
}

impl<'a> From<&'a Vec<u8>> for Magnitude<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Magnitude::Bytes(value)
    }
}
