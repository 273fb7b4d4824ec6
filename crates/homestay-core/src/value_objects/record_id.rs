//! Record ID - database-assigned integer identifier
//!
//! Hosts, students and acceptance schedules are keyed by auto-increment
//! integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of a persisted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a new RecordId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Parse from string representation
    ///
    /// Only strictly positive integers are accepted.
    pub fn parse(s: &str) -> Result<Self, RecordIdParseError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            Ok(_) => Err(RecordIdParseError::NotPositive),
            Err(_) => Err(RecordIdParseError::InvalidFormat),
        }
    }
}

/// Error when parsing a RecordId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be a positive integer")]
    NotPositive,
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

// Deserialize from number or numeric string (query strings and form posts
// deliver ids as text)
impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct RecordIdVisitor;

        impl Visitor<'_> for RecordIdVisitor {
            type Value = RecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a positive integer or numeric string")
            }

            fn visit_i64<E>(self, value: i64) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                if value <= 0 {
                    return Err(de::Error::custom("id must be a positive integer"));
                }
                Ok(RecordId(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map_err(|_| de::Error::custom("id out of range"))
                    .and_then(|v| self.visit_i64(v))
            }

            fn visit_str<E>(self, value: &str) -> Result<RecordId, E>
            where
                E: de::Error,
            {
                RecordId::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(RecordIdVisitor)
    }
}
