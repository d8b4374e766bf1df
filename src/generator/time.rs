//! Time utilities for Snowflake generation
//!
//! Provides wall-clock time in milliseconds since a configured epoch

use chrono::{DateTime, Utc};

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Get current time in milliseconds since custom epoch
///
/// Negative when the clock reads earlier than `epoch`.
#[inline(always)]
pub fn time_since_epoch(epoch: i64) -> i64 {
    unix_time_ms().saturating_sub(epoch)
}

/// Milliseconds since the Unix epoch for `t`, suitable as a generator epoch
#[inline]
pub fn epoch_millis(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis()
}
