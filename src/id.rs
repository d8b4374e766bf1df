//! The 64-bit Snowflake ID value type

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::codec::DecodeError;
use crate::config::SnowflakeConfig;
use crate::extractor::SnowflakeExtractor;

/// A generated Snowflake ID
///
/// Ordering follows the integer value, which for IDs from one generator is
/// the generation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Id(i64);

impl Id {
    #[inline(always)]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    #[inline(always)]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Creation time in milliseconds since the Unix epoch
    #[inline]
    pub fn time(self, config: &SnowflakeConfig) -> i64 {
        SnowflakeExtractor::new(*config).time(self)
    }

    /// Creation time as a calendar time
    #[inline]
    pub fn datetime(self, config: &SnowflakeConfig) -> Option<DateTime<Utc>> {
        SnowflakeExtractor::new(*config).datetime(self)
    }

    #[inline]
    pub fn node(self, config: &SnowflakeConfig) -> i64 {
        SnowflakeExtractor::new(*config).node(self)
    }

    #[inline]
    pub fn sequence(self, config: &SnowflakeConfig) -> i64 {
        SnowflakeExtractor::new(*config).sequence(self)
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Id> for i64 {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Id {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_string(s)
    }
}
