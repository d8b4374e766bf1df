//! Base58 with the Flickr alphabet

use once_cell::sync::Lazy;

use super::alphabet::{decode, decode_map, encode};
use super::DecodeError;
use crate::Id;

/// Character set for base58 encoding (no 0, O, I or l)
const BASE58_CHARS: &[u8; 58] = b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

/// Lookup table for decoding base58 characters to their values
static DECODE_MAP: Lazy<[u8; 256]> = Lazy::new(|| decode_map(BASE58_CHARS));

/// Maximum length of a base58 encoded ID
pub const MAX_LEN: usize = 11;

impl Id {
    /// Base58 encoded ID
    pub fn to_base58(self) -> String {
        encode(self.as_i64() as u64, BASE58_CHARS)
    }

    /// Decode the output of [`Id::to_base58`]
    ///
    /// # Errors
    ///
    /// [`DecodeError::InvalidBase58`] for any byte outside the alphabet.
    pub fn parse_base58(encoded: impl AsRef<[u8]>) -> Result<Self, DecodeError> {
        let value = decode(encoded.as_ref(), &DECODE_MAP, 58, DecodeError::InvalidBase58)?;
        Ok(Self::from_i64(value as i64))
    }
}
