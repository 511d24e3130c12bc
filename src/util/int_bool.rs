//! (De)serializes a boolean the API encodes as the integer 0 or 1.

use serde::{de::Unexpected, Deserialize, Deserializer, Serializer};

pub(crate) fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match i64::deserialize(deserializer)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(serde::de::Error::invalid_value(
            Unexpected::Signed(other),
            &"the integer 0 or 1",
        )),
    }
}
