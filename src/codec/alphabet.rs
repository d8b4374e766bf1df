//! Table-driven positional encoding shared by the base-N codecs
//!
//! Digits are written most significant first with no padding.

use super::DecodeError;

/// Marker for bytes outside an alphabet in a decode map
pub(crate) const INVALID: u8 = 0xFF;

/// Digits used by the base2 and base36 encoders (lowercase, like `{:x}`)
pub(crate) const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Maximum number of digits of a u64 in any supported radix (base 2)
const MAX_DIGITS: usize = 64;

/// Build the byte -> digit lookup table for an alphabet
pub(crate) fn decode_map(chars: &[u8]) -> [u8; 256] {
    let mut map = [INVALID; 256];
    for (i, &c) in chars.iter().enumerate() {
        map[c as usize] = i as u8;
    }
    map
}

/// Encode `value` using `chars` as the digit set; radix is `chars.len()`
pub(crate) fn encode(mut value: u64, chars: &[u8]) -> String {
    let radix = chars.len() as u64;
    if value < radix {
        return (chars[value as usize] as char).to_string();
    }

    let mut buffer = [0u8; MAX_DIGITS];
    let mut position = MAX_DIGITS;

    while value > 0 {
        position -= 1;
        buffer[position] = chars[(value % radix) as usize];
        value /= radix;
    }

    // Alphabets are ASCII
    buffer[position..].iter().map(|&b| b as char).collect()
}

/// Decode `encoded` with a lookup table built by [`decode_map`]
pub(crate) fn decode(
    encoded: &[u8],
    map: &[u8; 256],
    radix: u64,
    invalid: fn(u8) -> DecodeError,
) -> Result<u64, DecodeError> {
    if encoded.is_empty() {
        return Err(DecodeError::Empty);
    }

    let mut result: u64 = 0;
    for &c in encoded {
        let value = map[c as usize];
        if value == INVALID {
            return Err(invalid(c));
        }

        result = result
            .checked_mul(radix)
            .and_then(|r| r.checked_add(value as u64))
            .ok_or(DecodeError::Overflow)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(encode(0, &RADIX_DIGITS[..2]), "0");
        assert_eq!(encode(5, &RADIX_DIGITS[..2]), "101");
        assert_eq!(encode(35, &RADIX_DIGITS[..]), "z");
        assert_eq!(encode(36, &RADIX_DIGITS[..]), "10");
        assert_eq!(encode(u64::MAX, &RADIX_DIGITS[..2]), "1".repeat(64));
    }

    #[test]
    fn test_decode_map_marks_unknown_bytes() {
        let map = decode_map(b"ab");
        assert_eq!(map[b'a' as usize], 0);
        assert_eq!(map[b'b' as usize], 1);
        assert_eq!(map[b'c' as usize], INVALID);
    }

    #[test]
    fn test_decode_overflow() {
        let map = decode_map(&RADIX_DIGITS[..]);
        let too_long = "z".repeat(14);
        assert_eq!(
            decode(too_long.as_bytes(), &map, 36, DecodeError::InvalidBase32),
            Err(DecodeError::Overflow)
        );
    }
}
