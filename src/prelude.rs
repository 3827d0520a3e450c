//! Convenient re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use opb58::prelude::*;
//!
//! let id = Opb58Id::new(58);
//! assert_eq!(id.to_string(), "10");
//! assert_eq!(i64::from_opb58("10").unwrap(), 58);
//! assert_eq!(255u8.to_opb58().unwrap(), "4P");
//! ```

pub use crate::{
    // Codec
    FromOpb58,
    Magnitude,
    Opb58,
    Opb58Error,
    Opb58Id,
    ToOpb58,

    // Core encoding/decoding
    decode_to_bytes,
    decode_to_i32,
    decode_to_i64,
    encode_bytes,
    encode_integer,
    fits_i32,
    fits_i64,
};
