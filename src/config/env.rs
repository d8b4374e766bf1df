//! Environment variable overrides for SnowflakeConfigBuilder
//!
//! Node resolution order: `SNOWFLAKE_NODE`, then the host's private IPv4
//! address, then 0. Both sources are masked into the node space.

use std::fmt::Display;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::{debug, warn};

use super::network::{node_from_ipv4, private_ipv4};
use super::{SnowflakeConfig, SnowflakeConfigBuilder};

pub const ENV_START_TIME: &str = "SNOWFLAKE_START_TIME";
pub const ENV_NODE: &str = "SNOWFLAKE_NODE";
pub const ENV_NODE_BITS: &str = "SNOWFLAKE_NODE_BITS";
pub const ENV_SEQ_BITS: &str = "SNOWFLAKE_SEQ_BITS";

impl SnowflakeConfigBuilder {
    /// Create a builder seeded from `SNOWFLAKE_*` environment variables
    ///
    /// Unset variables keep their defaults and unparseable ones are ignored.
    /// Setters called afterwards override what the environment supplied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), private_ipv4)
    }

    pub(crate) fn from_lookup<L, I>(lookup: L, discover_ip: I) -> Self
    where
        L: Fn(&str) -> Option<String>,
        I: FnOnce() -> Option<Ipv4Addr>,
    {
        let mut builder = Self::new();
        if let Some(epoch) = parse_var(&lookup, ENV_START_TIME) {
            builder.epoch = epoch;
        }
        if let Some(bits) = parse_var(&lookup, ENV_NODE_BITS) {
            builder.node_bits = bits;
        }
        if let Some(bits) = parse_var(&lookup, ENV_SEQ_BITS) {
            builder.seq_bits = bits;
        }
        builder.node = resolve_node(&lookup, discover_ip, builder.node_bits);
        builder
    }
}

fn parse_var<L, T>(lookup: &L, key: &str) -> Option<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, value = %raw, %err, "ignoring unparseable environment variable");
            None
        }
    }
}

fn resolve_node<L, I>(lookup: &L, discover_ip: I, node_bits: u8) -> i64
where
    L: Fn(&str) -> Option<String>,
    I: FnOnce() -> Option<Ipv4Addr>,
{
    // Oversized widths are rejected later by build()
    let mask = SnowflakeConfig::calculate_mask(node_bits.min(63));

    if let Some(node) = parse_var::<L, i64>(lookup, ENV_NODE) {
        let node = node & mask;
        debug!(node, "node resolved from {}", ENV_NODE);
        return node;
    }

    match discover_ip() {
        Some(ip) => {
            let node = node_from_ipv4(ip, mask);
            debug!(node, %ip, "node resolved from private IPv4 address");
            node
        }
        None => {
            debug!("no node source found, using node 0");
            0
        }
    }
}
