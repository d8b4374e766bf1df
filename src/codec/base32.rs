//! Base32 with the z-base-32 style alphabet used by Snowflake IDs
//!
//! Not RFC 4648: digits are big-endian with no padding.

use once_cell::sync::Lazy;

use super::alphabet::{decode, decode_map, encode};
use super::DecodeError;
use crate::Id;

/// Character set for base32 encoding
const BASE32_CHARS: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

/// Lookup table for decoding base32 characters to their values
static DECODE_MAP: Lazy<[u8; 256]> = Lazy::new(|| decode_map(BASE32_CHARS));

/// Maximum length of a base32 encoded ID
pub const MAX_LEN: usize = 13;

impl Id {
    /// Base32 encoded ID
    pub fn to_base32(self) -> String {
        encode(self.as_i64() as u64, BASE32_CHARS)
    }

    /// Decode the output of [`Id::to_base32`]
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidBase32`] for any byte outside the alphabet.
    pub fn parse_base32(encoded: impl AsRef<[u8]>) -> Result<Self, DecodeError> {
        let value = decode(encoded.as_ref(), &DECODE_MAP, 32, DecodeError::InvalidBase32)?;
        Ok(Self::from_i64(value as i64))
    }
}
