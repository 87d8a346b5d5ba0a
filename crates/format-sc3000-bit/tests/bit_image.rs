//! BIT images rendered and decoded at common host sample rates.

use format_sc3000_bit::{BitTape, BitTapeError};

/// A byte on tape: start bit 0, eight data bits LSB first, two stop bits 1.
fn frame_byte(byte: u8) -> String {
    let mut bits = String::from("0");
    for i in 0..8 {
        bits.push(if (byte >> i) & 1 != 0 { '1' } else { '0' });
    }
    bits.push_str("11");
    bits
}

fn sample_image() -> Vec<u8> {
    let mut text = "1".repeat(40);
    text.push('\n');
    for &byte in b"SC-3000" {
        text.push_str(&frame_byte(byte));
        text.push(' ');
    }
    text.into_bytes()
}

#[test]
fn parse_and_serialize() {
    let tape = BitTape::parse(&sample_image()).expect("valid image");
    assert_eq!(tape.len(), 40 + 7 * 11);
    let bytes = tape.to_bytes();
    assert!(bytes.iter().all(|&b| b == b'0' || b == b'1'));
    assert_eq!(BitTape::parse(&bytes).expect("reparse"), tape);
}

#[test]
fn decode_at_common_rates() {
    let tape = BitTape::parse(&sample_image()).expect("valid image");
    for rate in [22_050, 44_100, 48_000, 96_000] {
        let samples = tape.to_samples(rate);
        assert_eq!(samples.len(), tape.len() * rate as usize / 1200, "{rate} Hz");
        assert_eq!(BitTape::decode(&samples, rate), tape, "{rate} Hz");
    }
}

#[test]
fn error_reports_offset() {
    let err = BitTape::parse(b"0101\n01,1").expect_err("comma");
    assert_eq!(
        err,
        BitTapeError::InvalidCharacter {
            offset: 7,
            byte: b','
        }
    );
}
