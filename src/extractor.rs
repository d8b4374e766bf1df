use chrono::{DateTime, Utc};

use crate::config::SnowflakeConfig;
use crate::Id;

/// Snowflake ID component extractor
///
/// Decoding is only meaningful with the config the ID was generated under.
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for IDs generated under `config`
    pub fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Milliseconds since the configured epoch
    #[inline(always)]
    pub fn elapsed(&self, id: Id) -> i64 {
        id.as_i64() >> self.config.timestamp_shift()
    }

    /// Creation time in milliseconds since the Unix epoch
    #[inline(always)]
    pub fn time(&self, id: Id) -> i64 {
        self.elapsed(id) + self.config.epoch()
    }

    /// Creation time as a calendar time
    #[inline]
    pub fn datetime(&self, id: Id) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time(id))
    }

    /// Extract node component from an ID
    #[inline(always)]
    pub fn node(&self, id: Id) -> i64 {
        (id.as_i64() & (self.config.node_mask() << self.config.node_shift()))
            >> self.config.node_shift()
    }

    /// Extract sequence component from an ID
    #[inline(always)]
    pub fn sequence(&self, id: Id) -> i64 {
        id.as_i64() & self.config.sequence_mask()
    }

    /// Decompose an ID into elapsed milliseconds, node ID and sequence
    #[inline]
    pub fn decompose(&self, id: Id) -> (i64, i64, i64) {
        (self.elapsed(id), self.node(id), self.sequence(id))
    }

    /// Reassemble an ID from its components, masking each to its field
    #[inline]
    pub fn compose(&self, elapsed: i64, node: i64, sequence: i64) -> Id {
        let cfg = &self.config;
        Id::from_i64(
            ((elapsed & cfg.timestamp_mask()) << cfg.timestamp_shift())
                | ((node & cfg.node_mask()) << cfg.node_shift())
                | (sequence & cfg.sequence_mask()),
        )
    }
}
