//! Integration tests for the full decode pipeline.
//!
//! These tests verify end-to-end behavior: hex string -> bit sequence ->
//! packet tree -> {version sum, evaluated value}, against the reference
//! transmissions, plus malformed-input and round-trip coverage.

use bits_decoder_core::{
    decode,
    error::{Error, EvalError, ParseError},
    evaluate,
    packet::Payload,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Encode a value as a literal packet (type 4) in hexadecimal, using the
/// minimal number of 5-bit groups and zero-padding to a digit boundary.
fn encode_literal(version: u8, value: u64) -> String {
    let mut nibbles = vec![];
    let mut v = value;
    loop {
        nibbles.push((v & 0xF) as u8);
        v >>= 4;
        if v == 0 {
            break;
        }
    }
    nibbles.reverse();

    let mut bits = String::new();
    for shift in (0..3).rev() {
        bits.push(if version >> shift & 1 == 1 { '1' } else { '0' });
    }
    bits.push_str("100"); // type ID 4
    let last = nibbles.len() - 1;
    for (i, nibble) in nibbles.iter().enumerate() {
        bits.push(if i == last { '0' } else { '1' });
        for shift in (0..4).rev() {
            bits.push(if nibble >> shift & 1 == 1 { '1' } else { '0' });
        }
    }

    while bits.len() % 4 != 0 {
        bits.push('0');
    }
    bits.as_bytes()
        .chunks(4)
        .map(|chunk| {
            let nibble = chunk
                .iter()
                .fold(0u32, |acc, &b| (acc << 1) | u32::from(b - b'0'));
            char::from_digit(nibble, 16).unwrap().to_ascii_uppercase()
        })
        .collect()
}

#[test]
fn test_literal_transmission() {
    let packet = decode("D2FE28").expect("decode failed");
    assert_eq!(packet.version, 6);
    assert_eq!(packet.payload, Payload::Literal(2021));
    assert_eq!(packet.version_sum(), 6);
    assert_eq!(evaluate(&packet).unwrap(), 2021);
}

#[test]
fn test_operator_with_three_children() {
    let packet = decode("EE00D40C823060").expect("decode failed");
    let values: Vec<_> = packet
        .children()
        .iter()
        .map(|child| evaluate(child).unwrap())
        .collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(packet.version_sum(), 14);
}

#[test]
fn test_version_sums() {
    let cases = [
        ("8A004A801A8002F478", 16),
        ("620080001611562C8802118E34", 12),
        ("C0015000016115A2E0802F182340", 23),
        ("A0016C880162017C3686B18A3D4780", 31),
    ];

    for (hex, expected) in cases {
        let packet = decode(hex).expect("decode failed");
        assert_eq!(packet.version_sum(), expected, "version sum for {hex}");
    }
}

#[test]
fn test_evaluation() {
    let cases = [
        ("C200B40A82", 3),            // sum of 1 and 2
        ("04005AC33890", 54),         // product of 6 and 9
        ("880086C3E88112", 7),        // minimum of 7, 8, 9
        ("CE00C43D881120", 9),        // maximum of 7, 8, 9
        ("D8005AC2A8F0", 1),          // 5 < 15
        ("F600BC2D8F", 0),            // 5 > 15 is false
        ("9C005AC2F8F0", 0),          // 5 == 15 is false
        ("9C0141080250320F1802104A08", 1), // 1 + 3 == 2 * 2
    ];

    for (hex, expected) in cases {
        let packet = decode(hex).expect("decode failed");
        assert_eq!(evaluate(&packet).unwrap(), expected, "value of {hex}");
    }
}

#[test]
fn test_framing_mismatch_is_an_error() {
    // Length-type-0 operator whose children overshoot the declared total
    let result = decode("380051453810");
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::Framing { .. }))
    ));
}

#[test]
fn test_truncated_transmission_is_an_error() {
    let result = decode("D2");
    assert!(matches!(
        result,
        Err(Error::Parse(ParseError::TruncatedInput { .. }))
    ));
}

#[test]
fn test_comparison_arity_checked_at_evaluation() {
    // Operator type 5 framed with three literal children; the tree decodes
    // fine but cannot be evaluated
    let packet = decode("1600C40881102").expect("decode failed");
    assert_eq!(packet.type_id, 5);
    assert_eq!(packet.children().len(), 3);
    assert_eq!(packet.version_sum(), 0);

    let result = evaluate(&packet);
    assert!(matches!(
        result,
        Err(Error::Eval(EvalError::WrongArity {
            type_id: 5,
            actual: 3,
        }))
    ));
}

#[test]
fn test_decode_is_idempotent() {
    let hex = "9C0141080250320F1802104A08";

    let first = decode(hex).expect("decode failed");
    let second = decode(hex).expect("decode failed");

    assert_eq!(first, second);
    assert_eq!(first.version_sum(), second.version_sum());
    assert_eq!(evaluate(&first).unwrap(), evaluate(&second).unwrap());
}

#[test]
fn test_literal_round_trip() {
    // A value requiring 6+ groups exercises multi-group concatenation
    for value in [0, 1, 15, 16, 2048, 0x1_2345_6789] {
        let hex = encode_literal(6, value);
        let packet = decode(&hex).expect("decode failed");
        assert_eq!(packet.version, 6);
        assert_eq!(packet.payload, Payload::Literal(value), "value {value}");
    }
}

#[test]
fn test_literal_round_trip_randomized() {
    // Seeded so failures are reproducible
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..200 {
        let value: u64 = rng.gen();
        let version = rng.gen_range(0..8);

        let hex = encode_literal(version, value);
        let packet = decode(&hex).expect("decode failed");

        assert_eq!(packet.version, version);
        assert_eq!(packet.payload, Payload::Literal(value), "value {value:#x}");
        assert_eq!(evaluate(&packet).unwrap(), value);
    }
}
