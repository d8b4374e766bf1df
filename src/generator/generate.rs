//! ID generation logic
//!
//! Core generate() implementation with fast and slow paths.
//!
//! A clock that reads earlier than the last issued millisecond is treated as
//! still being in that millisecond: the sequence keeps counting there and an
//! exhausted sequence waits for the clock to catch up. IDs therefore never
//! decrease, even across a wall-clock rollback.

use std::sync::atomic::Ordering;

use tracing::trace;

use super::state::State;
use super::wait::next_backoff;
use super::Snowflake;
use crate::Id;

impl Snowflake {
    /// Generate a new Snowflake ID
    #[inline]
    pub fn generate(&self) -> Id {
        let now = self.now_ms();
        let current = self.load_state();

        // Fast path 1: time advanced
        if now > self.state_layout.timestamp(current) {
            if let Some(id) = self.try_claim_millisecond(current, now) {
                return id;
            }
            return self.generate_slow_path();
        }

        // Fast path 2: same (or rolled back) millisecond, sequence available
        if let Some(id) = self.try_increment_sequence(current) {
            return id;
        }

        self.generate_slow_path()
    }

    /// Try to claim new millisecond with sequence 0
    #[inline]
    pub(crate) fn try_claim_millisecond(&self, current: State, new_ts: u64) -> Option<Id> {
        let new_state = self.pack_state(new_ts, 0);
        self.cas_state(current, new_state)
            .then(|| self.assemble_id(new_ts, 0))
    }

    /// Try to increment sequence within current millisecond
    #[inline]
    pub(crate) fn try_increment_sequence(&self, current: State) -> Option<Id> {
        let layout = self.state_layout;
        let sequence = layout.sequence(current);
        if sequence >= self.max_seq {
            return None;
        }
        let timestamp = layout.timestamp(current);
        let new_seq = sequence + 1;
        let new_state = self.pack_state(timestamp, new_seq);
        self.cas_state(current, new_state)
            .then(|| self.assemble_id(timestamp, new_seq))
    }

    /// Atomic compare-and-swap on state
    #[inline(always)]
    pub(crate) fn cas_state(&self, expected: State, new: State) -> bool {
        self.state
            .compare_exchange_weak(expected.raw(), new.raw(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Slow path for contended generation and sequence exhaustion
    #[cold]
    #[inline(never)]
    fn generate_slow_path(&self) -> Id {
        let mut backoff_ms = 1u64;

        loop {
            let now = self.now_ms();
            let current = self.load_state();
            let last_ts = self.state_layout.timestamp(current);

            if now > last_ts {
                if let Some(id) = self.try_claim_millisecond(current, now) {
                    return id;
                }
                continue;
            }

            if let Some(id) = self.try_increment_sequence(current) {
                return id;
            }

            trace!(
                timestamp = last_ts,
                behind_ms = last_ts - now,
                "sequence exhausted, waiting for next millisecond"
            );
            self.wait_next_millis(last_ts, backoff_ms);
            backoff_ms = next_backoff(backoff_ms);
        }
    }
}
