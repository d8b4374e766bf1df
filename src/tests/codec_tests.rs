//! Encoding round-trips across all supported forms

use crate::*;
use rand::Rng;

fn sample_ids() -> Vec<Id> {
    let mut rng = rand::rng();
    let mut ids = vec![
        Id::from_i64(0),
        Id::from_i64(1),
        Id::from_i64(13587),
        Id::from_i64(1 << 62),
        Id::from_i64(i64::MAX),
    ];
    ids.extend((0..200).map(|_| Id::from_i64(rng.random_range(0..i64::MAX))));
    ids
}

#[test]
fn test_all_codecs_round_trip() {
    for id in sample_ids() {
        assert_eq!(Id::parse_string(&id.to_string()).unwrap(), id);
        assert_eq!(id.to_string().parse::<Id>().unwrap(), id);
        assert_eq!(Id::parse_base2(&id.to_base2()).unwrap(), id);
        assert_eq!(Id::parse_base32(id.to_base32()).unwrap(), id);
        assert_eq!(Id::parse_base36(&id.to_base36()).unwrap(), id);
        assert_eq!(Id::parse_base58(id.to_base58()).unwrap(), id);
        assert_eq!(Id::parse_base64(&id.to_base64()).unwrap(), id);
        assert_eq!(Id::parse_bytes(&id.to_bytes()).unwrap(), id);
        assert_eq!(Id::from_be_bytes(id.to_be_bytes()), id);
        assert_eq!(Id::try_from_be_slice(&id.to_be_bytes()).unwrap(), id);
        assert_eq!(Id::from_json(&id.to_json()).unwrap(), id);
    }
}

#[test]
fn test_generated_ids_round_trip() {
    let generator = Snowflake::new(77).unwrap();
    for _ in 0..1000 {
        let id = generator.generate();
        assert_eq!(Id::parse_base58(id.to_base58()).unwrap(), id);
        assert_eq!(Id::parse_base32(id.to_base32()).unwrap(), id);
        assert_eq!(Id::parse_base36(&id.to_base36()).unwrap(), id);
    }
}

#[test]
fn test_known_encodings() {
    let id = Id::from_i64(13587);
    assert_eq!(id.to_string(), "13587");
    assert_eq!(id.to_base2(), "11010100010011");
    assert_eq!(id.to_base32(), "peu");
    assert_eq!(id.to_base36(), "ahf");
    assert_eq!(id.to_base58(), "53g");
    assert_eq!(id.to_base64(), "MTM1ODc=");
    assert_eq!(id.to_bytes(), b"13587");
    assert_eq!(id.to_json(), b"\"13587\"");
}

#[test]
fn test_negative_ids_use_signed_radix() {
    let id = Id::from_i64(-13587);
    assert_eq!(id.to_base2(), "-11010100010011");
    assert_eq!(id.to_base36(), "-ahf");
    assert_eq!(Id::parse_base2(&id.to_base2()).unwrap(), id);
    assert_eq!(Id::parse_base36(&id.to_base36()).unwrap(), id);
    assert_eq!(Id::from_i64(i64::MIN).to_base36(), "-1y2p0ij32e8e8");
}

#[test]
fn test_invalid_base32() {
    for (input, bad) in [("l", b'l'), ("pev", b'v'), ("y2y", b'2'), ("PEU", b'P')] {
        assert_eq!(
            Id::parse_base32(input),
            Err(DecodeError::InvalidBase32(bad)),
            "input {input}"
        );
    }
    assert_eq!(Id::parse_base32(""), Err(DecodeError::Empty));
}

#[test]
fn test_invalid_base58() {
    for (input, bad) in [("0", b'0'), ("53O", b'O'), ("I", b'I'), ("5-3", b'-')] {
        assert_eq!(Id::parse_base58(input), Err(DecodeError::InvalidBase58(bad)));
    }
    assert_eq!(Id::parse_base58(""), Err(DecodeError::Empty));
}

#[test]
fn test_invalid_text_forms() {
    assert!(matches!(Id::parse_string("12a"), Err(DecodeError::ParseInt(_))));
    assert!(matches!(Id::parse_string(""), Err(DecodeError::ParseInt(_))));
    assert!(matches!(Id::parse_base2("102"), Err(DecodeError::ParseInt(_))));
    assert!(matches!(Id::parse_base36("a_b"), Err(DecodeError::ParseInt(_))));
    assert!(matches!(Id::parse_base64("not base64!"), Err(DecodeError::Base64(_))));
    assert!(matches!(Id::parse_bytes(&[0xff, 0xfe]), Err(DecodeError::Utf8(_))));
    assert_eq!(
        Id::try_from_be_slice(&[1, 2, 3]),
        Err(DecodeError::InvalidLength {
            expected: 8,
            actual: 3
        })
    );
}

#[test]
fn test_json_examples() {
    assert_eq!(Id::from_json(b"\"13587\"").unwrap(), Id::from_i64(13587));
    assert_eq!(
        Id::from_json(b"13587"),
        Err(DecodeError::JsonSyntax(b"13587".to_vec()))
    );
    assert_eq!(
        Id::from_json(b"\"\""),
        Err(DecodeError::JsonSyntax(b"\"\"".to_vec()))
    );
    assert!(matches!(
        Id::from_json(b"\"abc\""),
        Err(DecodeError::ParseInt(_))
    ));
    assert_eq!(
        DecodeError::JsonSyntax(b"13587".to_vec()).to_string(),
        "invalid snowflake ID \"13587\""
    );
}

#[test]
fn test_serde_json_integration() {
    let id = Id::from_i64(1_234_567_890_123);
    let s = serde_json::to_string(&id).unwrap();
    assert_eq!(s, "\"1234567890123\"");
    assert_eq!(serde_json::from_str::<Id>(&s).unwrap(), id);
    assert_eq!(serde_json::from_str::<Id>("1234567890123").unwrap(), id);
    assert!(serde_json::from_str::<Id>("18446744073709551615").is_err());
}
