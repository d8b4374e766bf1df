//! SnowflakeConfig builder for constructing configuration

use super::SnowflakeConfig;
use crate::error::ConfigError;

/// Default configuration values
pub(super) const DEFAULT_EPOCH: i64 = 1288834974657; // 2010-11-04T01:42:54.657Z
pub(super) const DEFAULT_NODE_BITS: u8 = 10;
pub(super) const DEFAULT_SEQ_BITS: u8 = 12;
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for SnowflakeConfig
#[derive(Debug, Clone)]
pub struct SnowflakeConfigBuilder {
    pub(super) epoch: i64,
    pub(super) node_bits: u8,
    pub(super) seq_bits: u8,
    pub(super) node: i64,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
    pub(super) verbose: bool,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            epoch: DEFAULT_EPOCH,
            node_bits: DEFAULT_NODE_BITS,
            seq_bits: DEFAULT_SEQ_BITS,
            node: 0,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
            verbose: false,
        }
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Set the number of bits for the node ID
    pub const fn node_bits(mut self, bits: u8) -> Self {
        self.node_bits = bits;
        self
    }

    /// Set the number of bits for the per-millisecond sequence
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.seq_bits = bits;
        self
    }

    /// Set the node ID embedded in every generated ID
    pub const fn node(mut self, node: i64) -> Self {
        self.node = node;
        self
    }

    /// Enable or disable micro spin before sleep on overflow
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Log the layout banner at info level when a generator is created
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Build the final SnowflakeConfig
    ///
    /// # Errors
    ///
    /// * [`ConfigError::LayoutTooWide`] if node and sequence bits exceed 22
    /// * [`ConfigError::NodeOutOfRange`] if the node does not fit in the node bits
    pub fn build(self) -> Result<SnowflakeConfig, ConfigError> {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
