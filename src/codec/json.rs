//! JSON form of an ID: a quoted decimal string such as `"13587"`
//!
//! Quoting keeps IDs intact in JSON consumers that read numbers as doubles.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::DecodeError;
use crate::Id;

impl Id {
    /// JSON bytes of the ID
    pub fn to_json(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(22);
        buf.push(b'"');
        buf.extend_from_slice(self.to_string().as_bytes());
        buf.push(b'"');
        buf
    }

    /// Parse JSON bytes produced by [`Id::to_json`]
    ///
    /// # Errors
    ///
    /// [`DecodeError::JsonSyntax`] with the input when it is not wrapped in
    /// double quotes, [`DecodeError::ParseInt`] when the quoted text is not
    /// a decimal `i64`.
    pub fn from_json(bytes: &[u8]) -> Result<Self, DecodeError> {
        match bytes {
            [b'"', inner @ .., b'"'] if !inner.is_empty() => Self::parse_bytes(inner),
            _ => Err(DecodeError::JsonSyntax(bytes.to_vec())),
        }
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

struct IdVisitor;

impl Visitor<'_> for IdVisitor {
    type Value = Id;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a snowflake ID as a decimal string or integer")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Id::parse_string(v).map_err(E::custom)
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Id::from_i64(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(Id::from_i64)
            .map_err(|_| E::custom(DecodeError::Overflow))
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IdVisitor)
    }
}
