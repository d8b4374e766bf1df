//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Combined atomic state (timestamp + sequence)
//! - `time` - Wall-clock time utilities
//! - `wait` - Spin and backoff strategies
//! - `generate` - ID generation logic
//! - `codec_methods` - Generate-and-encode conveniences

mod codec_methods;
mod generate;
mod state;
mod time;
mod wait;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::SnowflakeConfig;
use crate::error::ConfigError;
use crate::extractor::SnowflakeExtractor;
use crate::Id;

pub use time::epoch_millis;
use state::{State, StateLayout};
use time::{time_since_epoch, unix_time_ms};
use wait::wait_past;

/// Emit the layout banner at the given level
macro_rules! layout_event {
    ($level:ident, $cfg:ident) => {
        $level!(
            timestamp_bits = $cfg.timestamp_bits(),
            node_bits = $cfg.node_bits(),
            sequence_bits = $cfg.sequence_bits(),
            node = $cfg.node_id(),
            max_time = $cfg.max_time_value(),
            max_node = $cfg.max_node_id(),
            max_sequence = $cfg.max_sequence_id(),
            epoch = $cfg.epoch(),
            start_time = ?$cfg.start_time(),
            lifetime = ?$cfg.lifetime(),
            "snowflake generator created"
        )
    };
}

/// Snowflake ID generator with cache-line alignment
///
/// One instance is safe to share between threads; every ID it returns is
/// unique and greater than the ones it returned before.
#[derive(Debug)]
#[repr(align(64))]
pub struct Snowflake {
    // === Hot path fields ===
    pub(crate) state: AtomicU64,
    pub(crate) state_layout: StateLayout,
    node_prefix: u64,
    pub(crate) max_seq: u64,
    ts_shift: u8,
    ts_mask: u64,
    epoch: i64,

    // === Cold path fields ===
    config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl Snowflake {
    /// Bits available to an ID after the unused sign bit
    pub const USABLE_BITS: u8 = 63;
    /// Upper bound on node bits + sequence bits, leaving at least 41 timestamp bits
    pub const MAX_NON_TIME_BITS: u8 = 22;

    /// Create with default layout and the given node
    pub fn new(node_id: i64) -> Result<Self, ConfigError> {
        Self::with_config(SnowflakeConfig::builder().node(node_id).build()?)
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// * [`ConfigError::LayoutTooWide`] / [`ConfigError::NodeOutOfRange`] if the
    ///   config fails validation
    /// * [`ConfigError::EpochInFuture`] if the epoch is after the current time
    /// * [`ConfigError::EpochTooOld`] if the elapsed time no longer fits the
    ///   timestamp bits
    pub fn with_config(config: SnowflakeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::validate_epoch(&config)?;

        let generator = Self::build(config);
        if config.verbose() {
            layout_event!(info, config);
        } else {
            layout_event!(debug, config);
        }
        Ok(generator)
    }

    /// The epoch must lie in the past, and the time elapsed since it must
    /// fit in the timestamp field
    fn validate_epoch(config: &SnowflakeConfig) -> Result<(), ConfigError> {
        let now = unix_time_ms();
        let epoch = config.epoch();
        if epoch > now {
            return Err(ConfigError::EpochInFuture { epoch, now });
        }
        match now.checked_sub(epoch) {
            Some(elapsed) if elapsed <= config.max_time_value() => Ok(()),
            _ => Err(ConfigError::EpochTooOld {
                epoch,
                now,
                max_elapsed: config.max_time_value(),
            }),
        }
    }

    fn build(config: SnowflakeConfig) -> Self {
        Self {
            state: AtomicU64::new(0),
            state_layout: StateLayout::new(config.sequence_bits()),
            node_prefix: Self::compute_node_prefix(&config),
            max_seq: config.max_sequence_id() as u64,
            ts_shift: config.timestamp_shift(),
            ts_mask: config.timestamp_mask() as u64,
            epoch: config.epoch(),
            config,
            extract: SnowflakeExtractor::new(config),
        }
    }

    #[inline(always)]
    fn compute_node_prefix(config: &SnowflakeConfig) -> u64 {
        (config.node_id() as u64) << config.node_shift()
    }

    #[inline(always)]
    pub fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    #[inline(always)]
    pub fn node_id(&self) -> i64 {
        self.config.node_id()
    }

    #[inline(always)]
    pub fn timestamp_bits(&self) -> u8 {
        self.config.timestamp_bits()
    }

    #[inline(always)]
    pub fn max_time_value(&self) -> i64 {
        self.config.max_time_value()
    }

    #[inline(always)]
    pub fn max_node_id(&self) -> i64 {
        self.config.max_node_id()
    }

    #[inline(always)]
    pub fn max_sequence_id(&self) -> i64 {
        self.config.max_sequence_id()
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.config.start_time()
    }

    pub fn lifetime(&self) -> Option<DateTime<Utc>> {
        self.config.lifetime()
    }

    #[inline(always)]
    pub(crate) fn load_state(&self) -> State {
        State::from_raw(self.state.load(Ordering::Acquire))
    }

    #[inline(always)]
    pub(crate) fn pack_state(&self, timestamp: u64, sequence: u64) -> State {
        self.state_layout.pack(timestamp, sequence)
    }

    /// Milliseconds since the epoch, clamped at 0 for a clock behind the epoch
    #[inline(always)]
    pub(crate) fn now_ms(&self) -> u64 {
        time_since_epoch(self.epoch).max(0) as u64
    }

    pub(crate) fn wait_next_millis(&self, from_ts: u64, backoff_ms: u64) -> u64 {
        wait_past(from_ts, &self.config, backoff_ms, || self.now_ms())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u64) -> Id {
        let raw = ((timestamp & self.ts_mask) << self.ts_shift) | self.node_prefix | sequence;
        Id::from_i64(raw as i64)
    }
}
