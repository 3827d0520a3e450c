use crate::codec::Opb58;
use crate::encoders::algorithms::errors::Opb58Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A record identifier rendered as its order-preserving base-58 encoding.
///
/// Ordering is numeric. Encoded forms sort the same way whenever they have
/// equal length; mixed-length strings must be compared by length first.
///
/// ```
/// use opb58::Opb58Id;
///
/// let id = Opb58Id::new(1_000_000);
/// assert_eq!(id.to_string(), "57FN");
/// assert_eq!("57FN".parse::<Opb58Id>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Opb58Id(u64);

impl Opb58Id {
    pub const fn new(raw: u64) -> Self {
        Opb58Id(raw)
    }

    pub const fn to_raw(self) -> u64 {
        self.0
    }

    pub fn encode(self) -> String {
        Opb58::shared().encode_u64(self.0)
    }

    pub fn decode(encoded: &str) -> Result<Self, Opb58Error> {
        Opb58::shared().decode_to_u64(encoded).map(Opb58Id)
    }
}

impl From<u64> for Opb58Id {
    fn from(raw: u64) -> Self {
        Opb58Id(raw)
    }
}

impl From<Opb58Id> for u64 {
    fn from(id: Opb58Id) -> Self {
        id.0
    }
}

impl fmt::Display for Opb58Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Opb58Id {
    type Err = Opb58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Serialize for Opb58Id {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for Opb58Id {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = Opb58Id;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an order-preserving base-58 string or an unsigned integer")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Opb58Id::decode(v).map_err(serde::de::Error::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Opb58Id(v))
            }
        }

        d.deserialize_any(IdVisitor)
    }
}
