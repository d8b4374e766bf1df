//! Waiting out an exhausted millisecond
//!
//! The generator first spins on the clock (if enabled), then sleeps with
//! exponential backoff. There is no timeout: the wait ends only when the
//! clock moves past the exhausted millisecond.

use std::thread;
use std::time::Duration;

use crate::config::SnowflakeConfig;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Block until `get_time` returns a value strictly greater than `from_timestamp`
pub fn wait_past<F>(
    from_timestamp: u64,
    config: &SnowflakeConfig,
    backoff_ms: u64,
    get_time: F,
) -> u64
where
    F: Fn() -> u64,
{
    if let Some(new_ts) = spin_wait(from_timestamp, config, &get_time) {
        return new_ts;
    }
    sleep_until_next_ms(from_timestamp, backoff_ms, get_time)
}

/// Spin on the clock for at most `config.spin_loops()` iterations
///
/// Returns Some(new_ts) if the timestamp advanced, None if the loops ran out
#[inline]
pub fn spin_wait<F>(from_timestamp: u64, config: &SnowflakeConfig, get_time: F) -> Option<u64>
where
    F: Fn() -> u64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning new timestamp once advanced
#[inline]
pub fn sleep_until_next_ms<F>(from_timestamp: u64, mut backoff_ms: u64, get_time: F) -> u64
where
    F: Fn() -> u64,
{
    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }
        thread::sleep(Duration::from_millis(backoff_ms));
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_next_backoff() {
        assert_eq!(next_backoff(1), 2);
        assert_eq!(next_backoff(50), 100);
        assert_eq!(next_backoff(100), 100);
        assert_eq!(next_backoff(u64::MAX), 100);
    }

    #[test]
    fn test_spin_wait_disabled() {
        let config = SnowflakeConfig::builder().enable_spin(false).build().unwrap();
        assert!(spin_wait(100, &config, || 200).is_none());
    }

    #[test]
    fn test_spin_wait_immediate_advance() {
        let config = SnowflakeConfig::builder().spin_loops(10).build().unwrap();
        assert_eq!(spin_wait(100, &config, || 200), Some(200));
    }

    #[test]
    fn test_spin_wait_gives_up() {
        let config = SnowflakeConfig::builder().spin_loops(8).build().unwrap();
        let calls = Cell::new(0u32);
        let result = spin_wait(100, &config, || {
            calls.set(calls.get() + 1);
            100
        });
        assert!(result.is_none());
        assert_eq!(calls.get(), 8);
    }

    #[test]
    fn test_wait_past_falls_back_to_sleep() {
        let config = SnowflakeConfig::builder().enable_spin(false).build().unwrap();
        let clock = Cell::new(99u64);
        let ts = wait_past(100, &config, 1, || {
            clock.set(clock.get() + 1);
            clock.get()
        });
        assert_eq!(ts, 101);
    }
}
