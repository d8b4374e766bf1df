//! Combined atomic state for timestamp + sequence
//!
//! Packs the last timestamp and sequence into a single u64 for lock-free CAS,
//! using the generator's own sequence width. The timestamp field is then as
//! wide as the ID's timestamp field (up to 63 bits) and never truncates an
//! elapsed time the ID itself can hold.

/// Combined state: timestamp above `seq_bits`, sequence in the low `seq_bits`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct State(u64);

/// Packing parameters shared by every state of one generator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateLayout {
    seq_bits: u8,
    seq_mask: u64,
}

impl StateLayout {
    #[inline(always)]
    pub const fn new(seq_bits: u8) -> Self {
        Self {
            seq_bits,
            seq_mask: (1u64 << seq_bits) - 1,
        }
    }

    /// Create new state from timestamp and sequence
    #[inline(always)]
    pub const fn pack(self, timestamp: u64, sequence: u64) -> State {
        State((timestamp << self.seq_bits) | (sequence & self.seq_mask))
    }

    /// Extract timestamp from state
    #[inline(always)]
    pub const fn timestamp(self, state: State) -> u64 {
        state.0 >> self.seq_bits
    }

    /// Extract sequence from state
    #[inline(always)]
    pub const fn sequence(self, state: State) -> u64 {
        state.0 & self.seq_mask
    }
}

impl State {
    /// Get raw u64 value for atomic operations
    #[inline(always)]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Create state from raw u64 value
    #[inline(always)]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_roundtrip() {
        let layout = StateLayout::new(12);
        let ts = 123456789u64;
        let seq = 4095u64;
        let state = layout.pack(ts, seq);

        assert_eq!(layout.timestamp(state), ts);
        assert_eq!(layout.sequence(state), seq);
        assert_eq!(State::from_raw(state.raw()), state);
    }

    #[test]
    fn test_wide_timestamp_is_kept() {
        // 4 sequence bits leave 59 timestamp bits in the ID
        let layout = StateLayout::new(4);
        let ts = (1u64 << 59) - 1;
        let state = layout.pack(ts, 15);

        assert_eq!(layout.timestamp(state), ts);
        assert_eq!(layout.sequence(state), 15);

        let past_42_bits = 4_800_000_000_000u64;
        assert!(past_42_bits >= 1 << 42);
        assert_eq!(layout.timestamp(layout.pack(past_42_bits, 3)), past_42_bits);
    }

    #[test]
    fn test_no_sequence_bits() {
        let layout = StateLayout::new(0);
        let state = layout.pack((1u64 << 63) - 1, 5);

        assert_eq!(layout.timestamp(state), (1u64 << 63) - 1);
        assert_eq!(layout.sequence(state), 0);
    }

    #[test]
    fn test_state_zero() {
        let layout = StateLayout::new(22);
        let state = layout.pack(0, 0);
        assert_eq!(state.raw(), 0);
        assert_eq!(layout.timestamp(state), 0);
        assert_eq!(layout.sequence(state), 0);
    }
}
