//! Encoded-ID convenience methods for the Snowflake generator

use super::Snowflake;
use crate::codec::DecodeError;
use crate::Id;

impl Snowflake {
    /// Generate a new ID encoded as base58, together with the raw ID
    pub fn generate_base58(&self) -> (String, Id) {
        let id = self.generate();
        (id.to_base58(), id)
    }

    /// Generate a new ID encoded as base32, together with the raw ID
    pub fn generate_base32(&self) -> (String, Id) {
        let id = self.generate();
        (id.to_base32(), id)
    }

    /// Generate a new ID as its JSON bytes, together with the raw ID
    pub fn generate_json(&self) -> (Vec<u8>, Id) {
        let id = self.generate();
        (id.to_json(), id)
    }

    /// Decompose a base58 encoded ID into elapsed milliseconds, node and sequence
    pub fn decompose_base58(&self, encoded: &str) -> Result<(i64, i64, i64), DecodeError> {
        let id = Id::parse_base58(encoded)?;
        Ok(self.extract.decompose(id))
    }

    /// Decompose a base32 encoded ID into elapsed milliseconds, node and sequence
    pub fn decompose_base32(&self, encoded: &str) -> Result<(i64, i64, i64), DecodeError> {
        let id = Id::parse_base32(encoded)?;
        Ok(self.extract.decompose(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58_generate() {
        let generator = Snowflake::new(1).unwrap();
        let (encoded, raw) = generator.generate_base58();

        assert_eq!(Id::parse_base58(&encoded).unwrap(), raw);

        let (elapsed, node_id, sequence) = generator.decompose_base58(&encoded).unwrap();
        assert_eq!(node_id, 1);
        assert!(elapsed > 0);
        assert!(sequence <= generator.max_sequence_id());
    }

    #[test]
    fn test_base32_generate() {
        let generator = Snowflake::new(9).unwrap();
        let (encoded, raw) = generator.generate_base32();

        assert_eq!(Id::parse_base32(&encoded).unwrap(), raw);
        let (_, node_id, _) = generator.decompose_base32(&encoded).unwrap();
        assert_eq!(node_id, 9);
    }

    #[test]
    fn test_json_generate() {
        let generator = Snowflake::new(1).unwrap();
        let (json, raw) = generator.generate_json();
        assert_eq!(Id::from_json(&json).unwrap(), raw);
    }

    #[test]
    fn test_decompose_invalid_input() {
        let generator = Snowflake::new(1).unwrap();
        assert_eq!(
            generator.decompose_base58("0abc"),
            Err(DecodeError::InvalidBase58(b'0'))
        );
        assert_eq!(
            generator.decompose_base32("lll"),
            Err(DecodeError::InvalidBase32(b'l'))
        );
    }
}
