//! Configuration for the Snowflake generator

mod builder;
mod env;
mod network;

use chrono::{DateTime, Utc};

pub use builder::SnowflakeConfigBuilder;
pub use env::{ENV_NODE, ENV_NODE_BITS, ENV_SEQ_BITS, ENV_START_TIME};
pub use network::private_ipv4;
use builder::{
    DEFAULT_EPOCH, DEFAULT_NODE_BITS, DEFAULT_SEQ_BITS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

use crate::error::ConfigError;
use crate::Snowflake;

/// Bit layout, epoch and node for a Snowflake generator
///
/// The layout is not recorded inside an ID, so the same config must be used
/// to decode IDs it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    epoch: i64,
    node_bits: u8,
    seq_bits: u8,
    node_id: i64,
    timestamp_shift: u8,
    node_shift: u8,
    timestamp_mask: i64,
    node_mask: i64,
    sequence_mask: i64,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
    verbose: bool,
}

impl SnowflakeConfig {
    /// Calculate mask for given number of bits
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> i64 {
        !(-1i64 << bits)
    }

    /// Reject layouts that leave less than 41 timestamp bits
    pub(crate) fn check_layout(node_bits: u8, seq_bits: u8) -> Result<(), ConfigError> {
        let sum = node_bits as u16 + seq_bits as u16;
        if sum > Snowflake::MAX_NON_TIME_BITS as u16 {
            return Err(ConfigError::LayoutTooWide {
                node_bits,
                seq_bits,
                sum,
                max: Snowflake::MAX_NON_TIME_BITS,
            });
        }
        Ok(())
    }

    /// Layout must already have passed `check_layout`
    fn new(epoch: i64, node_bits: u8, seq_bits: u8, node_id: i64) -> Self {
        let timestamp_shift = node_bits + seq_bits;
        Self {
            epoch,
            node_bits,
            seq_bits,
            node_id,
            timestamp_shift,
            node_shift: seq_bits,
            timestamp_mask: Self::calculate_mask(Snowflake::USABLE_BITS - timestamp_shift),
            node_mask: Self::calculate_mask(node_bits),
            sequence_mask: Self::calculate_mask(seq_bits),
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            verbose: false,
        }
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Result<Self, ConfigError> {
        // Shifts and masks in new() are only sound for a checked layout
        Self::check_layout(b.node_bits, b.seq_bits)?;
        let mut cfg = Self::new(b.epoch, b.node_bits, b.seq_bits, b.node);
        cfg.spin_enabled = b.spin_enabled;
        cfg.spin_loops = b.spin_loops;
        cfg.spin_yield_every = b.spin_yield_every;
        cfg.verbose = b.verbose;
        cfg.check_node()?;
        Ok(cfg)
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Check the layout and that the node ID fits in the node bits
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::check_layout(self.node_bits, self.seq_bits)?;
        self.check_node()
    }

    fn check_node(&self) -> Result<(), ConfigError> {
        if self.node_id < 0 || self.node_id > self.node_mask {
            return Err(ConfigError::NodeOutOfRange {
                node_id: self.node_id,
                max: self.node_mask,
            });
        }
        Ok(())
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    #[inline(always)]
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.seq_bits
    }

    /// Width of the timestamp field, excluding the unused sign bit
    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        Snowflake::USABLE_BITS - self.timestamp_shift
    }

    #[inline(always)]
    pub const fn node_id(&self) -> i64 {
        self.node_id
    }

    #[inline(always)]
    pub const fn max_node_id(&self) -> i64 {
        self.node_mask
    }

    #[inline(always)]
    pub const fn max_sequence_id(&self) -> i64 {
        self.sequence_mask
    }

    /// Largest value the timestamp field can hold
    #[inline(always)]
    pub const fn max_time_value(&self) -> i64 {
        self.timestamp_mask
    }

    /// Epoch as a calendar time
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch)
    }

    /// Calendar time at which the timestamp field overflows
    ///
    /// `None` when the instant is outside the range chrono can represent,
    /// which happens for narrow node/sequence layouts.
    pub fn lifetime(&self) -> Option<DateTime<Utc>> {
        self.epoch
            .checked_add(self.max_time_value())
            .and_then(DateTime::from_timestamp_millis)
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub(crate) const fn node_shift(&self) -> u8 {
        self.node_shift
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> i64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub(crate) const fn node_mask(&self) -> i64 {
        self.node_mask
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> i64 {
        self.sequence_mask
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EPOCH, DEFAULT_NODE_BITS, DEFAULT_SEQ_BITS, 0)
    }
}
