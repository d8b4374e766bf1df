//! # Snowflake
//!
//! A Rust implementation of the Twitter Snowflake ID generator with a
//! configurable bit layout.
//!
//! ```text
//! +--------------------------------------------------------------------------+
//! | 1 Bit Unused | 41 Bit Timestamp |  10 Bit NodeID  |   12 Bit Sequence ID |
//! +--------------------------------------------------------------------------+
//! ```
//!
//! Node and sequence widths are configurable as long as together they take
//! at most 22 bits; the timestamp gets the rest.
//!
//! Generated IDs are:
//! - 📈 Time-sorted
//! - 🔄 Monotonic per generator, including across clock rollbacks
//! - 🔒 Thread-safe (lock-free)
//! - 🔤 Encodable as base2/32/36/58/64, bytes and JSON

#![forbid(unsafe_code)]

pub mod codec;
mod config;
mod error;
mod extractor;
mod generator;
mod id;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use codec::DecodeError;
pub use config::{
    private_ipv4, SnowflakeConfig, SnowflakeConfigBuilder, ENV_NODE, ENV_NODE_BITS, ENV_SEQ_BITS,
    ENV_START_TIME,
};
pub use error::ConfigError;
pub use extractor::SnowflakeExtractor;
pub use generator::{epoch_millis, Snowflake};
pub use id::Id;
