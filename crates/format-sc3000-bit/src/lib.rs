//! Sega SC-3000 BIT cassette image.
//!
//! A BIT image is the bit stream of an SC-3000 tape written out as ASCII
//! `'0'` and `'1'` characters. ASCII whitespace between bits is ignored.
//!
//! The SC-3000 records at 1200 baud with two tones:
//!
//! - bit 0: one cycle of 1200 Hz
//! - bit 1: two cycles of 2400 Hz
//!
//! Every cycle starts with its positive half. Both bits last 1/1200 s, so
//! timing is done in units of 1/4800 s: a bit-0 half-cycle is two units,
//! a bit-1 half-cycle is one.

use std::fmt;

/// Timing units per second (one unit is a bit-1 half-cycle).
const UNITS_PER_SECOND: u64 = 4800;
/// Half-cycle lengths in units.
const HALF_UNITS_ZERO: u64 = 2;
const HALF_UNITS_ONE: u64 = 1;
/// Decoder run thresholds in half-units: a run of at least `LONG` is a
/// bit-0 half-cycle, a run longer than `GAP` (a whole bit) is a gap.
const LONG_RUN_HALF_UNITS: u64 = 3;
const GAP_RUN_HALF_UNITS: u64 = 8;

/// Line level of the positive and negative half-cycles.
pub const HIGH: f32 = 1.0;
pub const LOW: f32 = -1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitTapeError {
    /// A byte that is neither a bit nor whitespace.
    InvalidCharacter { offset: usize, byte: u8 },
}

impl fmt::Display for BitTapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { offset, byte } => write!(
                f,
                "invalid BIT image byte ${byte:02X} at offset {offset} (expected '0', '1' or whitespace)",
            ),
        }
    }
}

impl std::error::Error for BitTapeError {}

/// A parsed BIT image: the tape's bit stream in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitTape {
    bits: Vec<bool>,
}

impl BitTape {
    #[must_use]
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Parse a BIT image.
    pub fn parse(data: &[u8]) -> Result<Self, BitTapeError> {
        let mut bits = Vec::with_capacity(data.len());
        for (offset, &byte) in data.iter().enumerate() {
            match byte {
                b'0' => bits.push(false),
                b'1' => bits.push(true),
                b if b.is_ascii_whitespace() => {}
                byte => return Err(BitTapeError::InvalidCharacter { offset, byte }),
            }
        }
        log::debug!("BIT image: {} bits", bits.len());
        Ok(Self { bits })
    }

    /// Serialize as a BIT image.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .iter()
            .map(|&bit| if bit { b'1' } else { b'0' })
            .collect()
    }

    #[must_use]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Render the tape as a square wave at `sample_rate`.
    ///
    /// Half-cycle edges land on the nearest earlier sample, computed from
    /// the absolute tape position so rounding never accumulates. Returns
    /// an empty waveform for a zero sample rate.
    #[must_use]
    pub fn to_samples(&self, sample_rate: u32) -> Vec<f32> {
        let rate = u64::from(sample_rate);
        if rate == 0 {
            return Vec::new();
        }

        let total_units = self.bits.len() as u64 * 2 * HALF_UNITS_ZERO;
        let mut samples = Vec::with_capacity((total_units * rate / UNITS_PER_SECOND) as usize);
        let mut units = 0u64;

        for &bit in &self.bits {
            let (halves, half_units) = if bit {
                (4, HALF_UNITS_ONE)
            } else {
                (2, HALF_UNITS_ZERO)
            };
            for half in 0..halves {
                let level = if half % 2 == 0 { HIGH } else { LOW };
                units += half_units;
                let end = (units * rate / UNITS_PER_SECOND) as usize;
                if end > samples.len() {
                    samples.resize(end, level);
                }
            }
        }

        samples
    }

    /// Recover the bit stream from a recorded waveform.
    ///
    /// Samples above 0.0 are high, everything else low. Each run of equal
    /// level is classified by length: around two units is half of a bit 0,
    /// around one unit is a quarter of a bit 1. Runs longer than a whole
    /// bit are gaps and resynchronise the decoder. Needs a sample rate of
    /// at least 9600 Hz to resolve bit-1 half-cycles.
    #[must_use]
    pub fn decode(samples: &[f32], sample_rate: u32) -> Self {
        let rate = u64::from(sample_rate);
        let mut bits = Vec::new();
        if rate == 0 {
            return Self { bits };
        }

        let mut long_halves = 0u8;
        let mut short_halves = 0u8;
        let mut dropped = 0usize;

        for run in runs(samples) {
            let half_units = run as u64 * UNITS_PER_SECOND * 2 / rate;
            if half_units > GAP_RUN_HALF_UNITS {
                dropped += usize::from(long_halves + short_halves);
                long_halves = 0;
                short_halves = 0;
            } else if half_units >= LONG_RUN_HALF_UNITS {
                dropped += usize::from(short_halves);
                short_halves = 0;
                long_halves += 1;
                if long_halves == 2 {
                    bits.push(false);
                    long_halves = 0;
                }
            } else {
                dropped += usize::from(long_halves);
                long_halves = 0;
                short_halves += 1;
                if short_halves == 4 {
                    bits.push(true);
                    short_halves = 0;
                }
            }
        }

        if dropped > 0 {
            log::debug!("BIT decode: {dropped} stray half-cycles dropped");
        }
        Self { bits }
    }
}

/// Lengths of consecutive runs of high (> 0.0) and low samples.
fn runs(samples: &[f32]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut iter = samples.iter().map(|&s| s > 0.0);
    let Some(mut current) = iter.next() else {
        return runs;
    };
    let mut len = 1usize;
    for high in iter {
        if high == current {
            len += 1;
        } else {
            runs.push(len);
            current = high;
            len = 1;
        }
    }
    runs.push(len);
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bits_and_whitespace() {
        let tape = BitTape::parse(b"01 1\r\n0\t1").expect("valid");
        assert_eq!(tape.bits(), &[false, true, true, false, true]);
    }

    #[test]
    fn parse_rejects_stray_byte() {
        let err = BitTape::parse(b"0101x1").expect_err("invalid");
        assert_eq!(
            err,
            BitTapeError::InvalidCharacter {
                offset: 4,
                byte: b'x'
            }
        );
        assert!(err.to_string().contains("offset 4"));
    }

    #[test]
    fn parse_empty() {
        let tape = BitTape::parse(b"").expect("valid");
        assert!(tape.is_empty());
        assert!(tape.to_samples(44_100).is_empty());
    }

    #[test]
    fn to_bytes_is_plain_bits() {
        let tape = BitTape::from_bits(vec![true, false, false, true]);
        assert_eq!(tape.to_bytes(), b"1001");
    }

    #[test]
    fn zero_bit_is_one_1200hz_cycle() {
        // 48 kHz: one unit is exactly 10 samples.
        let samples = BitTape::from_bits(vec![false]).to_samples(48_000);
        assert_eq!(samples.len(), 40);
        assert!(samples[..20].iter().all(|&s| s == HIGH));
        assert!(samples[20..].iter().all(|&s| s == LOW));
    }

    #[test]
    fn one_bit_is_two_2400hz_cycles() {
        let samples = BitTape::from_bits(vec![true]).to_samples(48_000);
        assert_eq!(samples.len(), 40);
        assert_eq!(runs(&samples), vec![10, 10, 10, 10]);
        assert_eq!(samples[0], HIGH);
        assert_eq!(samples[10], LOW);
    }

    #[test]
    fn fractional_rate_keeps_total_length() {
        // 100 bits at 44.1 kHz last 100/1200 s = 3675 samples.
        let tape = BitTape::from_bits(vec![true; 100]);
        assert_eq!(tape.to_samples(44_100).len(), 3675);
    }

    #[test]
    fn decode_recovers_rendered_bits() {
        let bits = vec![true, true, false, true, false, false, true, false];
        let tape = BitTape::from_bits(bits);
        let samples = tape.to_samples(44_100);
        assert_eq!(BitTape::decode(&samples, 44_100), tape);
    }

    #[test]
    fn decode_resyncs_after_gap() {
        let mut samples = BitTape::from_bits(vec![false]).to_samples(48_000);
        // Half a bit-1, then silence.
        samples.extend(std::iter::repeat_n(HIGH, 10));
        samples.extend(std::iter::repeat_n(0.0, 200));
        samples.extend(BitTape::from_bits(vec![true]).to_samples(48_000));
        assert_eq!(
            BitTape::decode(&samples, 48_000).bits(),
            &[false, true]
        );
    }

    #[test]
    fn zero_rate_is_empty() {
        let tape = BitTape::from_bits(vec![true]);
        assert!(tape.to_samples(0).is_empty());
        assert!(BitTape::decode(&[1.0, -1.0], 0).is_empty());
    }
}
