use thiserror::Error;

/// Errors raised while validating a configuration or constructing a generator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Node and sequence bits leave too few bits for the timestamp
    #[error("Sum({sum}) of node bits ({node_bits}) and sequence bits ({seq_bits}) must not exceed {max}")]
    LayoutTooWide {
        node_bits: u8,
        seq_bits: u8,
        sum: u16,
        max: u8,
    },
    /// Node ID does not fit in the configured node bits
    #[error("Node ID {node_id} is invalid. Node number must be between 0 and {max}")]
    NodeOutOfRange { node_id: i64, max: i64 },
    /// Epoch lies after the current wall-clock time
    #[error("Start time {epoch} must be before the current time {now}")]
    EpochInFuture { epoch: i64, now: i64 },
    /// Time elapsed since the epoch does not fit in the timestamp bits
    #[error("Start time {epoch} is too far before the current time {now}; at most {max_elapsed} ms may have elapsed")]
    EpochTooOld {
        epoch: i64,
        now: i64,
        max_elapsed: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let too_wide = ConfigError::LayoutTooWide {
            node_bits: 12,
            seq_bits: 12,
            sum: 24,
            max: 22,
        };
        assert_eq!(
            too_wide.to_string(),
            "Sum(24) of node bits (12) and sequence bits (12) must not exceed 22"
        );

        let invalid_node = ConfigError::NodeOutOfRange {
            node_id: 1024,
            max: 1023,
        };
        assert_eq!(
            invalid_node.to_string(),
            "Node ID 1024 is invalid. Node number must be between 0 and 1023"
        );

        let future = ConfigError::EpochInFuture { epoch: 200, now: 100 };
        assert_eq!(
            future.to_string(),
            "Start time 200 must be before the current time 100"
        );

        let too_old = ConfigError::EpochTooOld {
            epoch: -5,
            now: 10,
            max_elapsed: 7,
        };
        assert_eq!(
            too_old.to_string(),
            "Start time -5 is too far before the current time 10; at most 7 ms may have elapsed"
        );
    }

    #[test]
    fn test_error_debug() {
        let invalid_node = ConfigError::NodeOutOfRange {
            node_id: -1,
            max: 1023,
        };
        assert!(format!("{:?}", invalid_node).contains("NodeOutOfRange"));
    }

    #[test]
    fn test_error_clone() {
        let original = ConfigError::EpochInFuture { epoch: 2, now: 1 };
        let cloned = original.clone();
        assert_eq!(original, cloned);
    }
}
