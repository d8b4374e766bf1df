//! Text and binary representations of [`Id`]
//!
//! Every `parse_*` function is the inverse of the matching `to_*` method for
//! non-negative IDs. Base32 and base58 encode the two's-complement bits of
//! negative IDs; the radix-10/2/36 forms carry a leading `-`.

mod alphabet;
mod base32;
mod base58;
mod json;

use std::num::ParseIntError;
use std::str::Utf8Error;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

use crate::Id;
use alphabet::RADIX_DIGITS;

pub use base32::MAX_LEN as BASE32_MAX_LEN;
pub use base58::MAX_LEN as BASE58_MAX_LEN;

/// Errors that can occur while decoding an ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is empty
    #[error("cannot decode an empty input")]
    Empty,

    /// A byte outside the base32 alphabet
    #[error("invalid base32 byte {0:#04x}")]
    InvalidBase32(u8),

    /// A byte outside the base58 alphabet
    #[error("invalid base58 byte {0:#04x}")]
    InvalidBase58(u8),

    /// The decoded value does not fit in 64 bits
    #[error("decoded value would overflow 64 bits")]
    Overflow,

    /// JSON input is not a quoted decimal
    #[error("invalid snowflake ID {:?}", String::from_utf8_lossy(.0))]
    JsonSyntax(Vec<u8>),

    /// Byte slice of the wrong length for a big-endian ID
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error(transparent)]
    ParseInt(#[from] ParseIntError),

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}

fn format_radix(value: i64, radix: usize) -> String {
    let digits = alphabet::encode(value.unsigned_abs(), &RADIX_DIGITS[..radix]);
    if value < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

impl Id {
    /// Parse a decimal string
    pub fn parse_string(s: &str) -> Result<Self, DecodeError> {
        Ok(Self::from_i64(s.parse::<i64>()?))
    }

    /// Binary string
    pub fn to_base2(self) -> String {
        format_radix(self.as_i64(), 2)
    }

    /// Parse a binary string
    pub fn parse_base2(s: &str) -> Result<Self, DecodeError> {
        Ok(Self::from_i64(i64::from_str_radix(s, 2)?))
    }

    /// Base36 string, lowercase digits
    pub fn to_base36(self) -> String {
        format_radix(self.as_i64(), 36)
    }

    /// Parse a base36 string; accepts either letter case
    pub fn parse_base36(s: &str) -> Result<Self, DecodeError> {
        Ok(Self::from_i64(i64::from_str_radix(s, 36)?))
    }

    /// Standard padded base64 of the decimal string bytes
    pub fn to_base64(self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Parse the output of [`Id::to_base64`]
    pub fn parse_base64(s: &str) -> Result<Self, DecodeError> {
        let bytes = STANDARD.decode(s)?;
        Self::parse_bytes(&bytes)
    }

    /// Decimal string as ASCII bytes
    pub fn to_bytes(self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Parse decimal ASCII bytes
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::parse_string(std::str::from_utf8(bytes)?)
    }

    /// 8-byte big-endian representation
    #[inline]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.as_i64().to_be_bytes()
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::from_i64(i64::from_be_bytes(bytes))
    }

    /// Parse a big-endian slice that must be exactly 8 bytes long
    pub fn try_from_be_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let array: [u8; 8] = bytes.try_into().map_err(|_| DecodeError::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self::from_be_bytes(array))
    }
}
