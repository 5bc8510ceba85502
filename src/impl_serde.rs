//!
//! Support for serde implementations
//!
//! Values serialize as their radix string (`"-a1f (base 16)"`), so the
//! radix survives a round trip. Native integers deserialize in the
//! default context.
//!
use crate::*;
use serde::{de, ser};
use stdlib::str::FromStr;


impl ser::Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&format_args!("{:#}", self))
    }
}

/// Used by SerDe to construct a BigInt
struct BigIntVisitor;

impl BigIntVisitor {
    fn from_i128<E: de::Error>(value: i128) -> Result<BigInt, E> {
        BigInt::from_i128(value, &Context::default()).map_err(|err| E::custom(format!("{}", err)))
    }
}

impl<'de> de::Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted radix integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigIntVisitor::from_i128(value.into())
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigIntVisitor::from_i128(value.into())
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigInt::from_u128(value, &Context::default()).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
    where
        E: de::Error,
    {
        BigIntVisitor::from_i128(value)
    }
}

impl<'de> de::Deserialize<'de> for BigInt {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigIntVisitor)
    }
}
