//! Cassette tape deck.
//!
//! Plays and records a waveform at a fixed sample rate. The host ticks the
//! deck at its master clock; a phase accumulator converts that into sample
//! steps, so any clock and sample rate pair keeps exact average timing.
//!
//! Tapes load from BIT images or WAV files; WAV input is mixed down to mono
//! and resampled to the deck rate.

use std::io::{Read, Seek, Write};

use emu_core::{Observable, Tickable, Value};
use format_sc3000_bit::{BitTape, BitTapeError};

use crate::cassette::Cassette;
use crate::config::TapeConfig;

/// Transport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Stopped,
    Playing,
    Recording,
}

impl TransportState {
    const fn name(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Recording => "recording",
        }
    }
}

/// A tape recorder on the SK-1100 cassette port.
#[derive(Debug, Clone)]
pub struct TapeDeck {
    config: TapeConfig,
    state: TransportState,
    /// Loaded waveform.
    tape: Vec<f32>,
    /// Playback position in samples.
    position: usize,
    recording: Vec<f32>,
    /// Last level driven on the record line.
    output_level: f64,
    /// Master clock ticks accumulated toward the next sample, scaled by the
    /// sample rate.
    phase: u64,
}

impl TapeDeck {
    #[must_use]
    pub fn new(config: TapeConfig) -> Self {
        Self {
            config,
            state: TransportState::Stopped,
            tape: Vec::new(),
            position: 0,
            recording: Vec::new(),
            output_level: 0.0,
            phase: 0,
        }
    }

    /// Load a waveform sampled at the deck's sample rate. Stops and rewinds.
    pub fn insert_samples(&mut self, samples: Vec<f32>) {
        log::debug!("tape: inserted {} samples", samples.len());
        self.tape = samples;
        self.state = TransportState::Stopped;
        self.rewind();
    }

    /// Load a parsed BIT image.
    pub fn insert_bit(&mut self, tape: &BitTape) {
        self.insert_samples(tape.to_samples(self.config.sample_rate));
    }

    /// Parse and load a BIT image.
    pub fn load_bit(&mut self, data: &[u8]) -> Result<(), BitTapeError> {
        let tape = BitTape::parse(data)?;
        self.insert_bit(&tape);
        Ok(())
    }

    /// Load a WAV file of any rate, width and channel count.
    pub fn load_wav<R: Read>(&mut self, reader: R) -> Result<(), hound::Error> {
        let mut wav = hound::WavReader::new(reader)?;
        let spec = wav.spec();
        let interleaved: Vec<f32> = match spec.sample_format {
            hound::SampleFormat::Float => wav.samples::<f32>().collect::<Result<_, _>>()?,
            hound::SampleFormat::Int => {
                let scale = (1_i64 << spec.bits_per_sample.saturating_sub(1)) as f32;
                wav.samples::<i32>()
                    .map(|sample| sample.map(|s| s as f32 / scale))
                    .collect::<Result<_, _>>()?
            }
        };

        let channels = usize::from(spec.channels.max(1));
        let mono: Vec<f32> = interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect();
        log::debug!(
            "tape: WAV {} Hz, {} ch, {} frames",
            spec.sample_rate,
            spec.channels,
            mono.len()
        );
        self.insert_samples(resample(&mono, spec.sample_rate, self.config.sample_rate));
        Ok(())
    }

    /// Write the recording as 16-bit mono WAV at the deck rate.
    pub fn save_wav<W: Write + Seek>(&self, writer: W) -> Result<(), hound::Error> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.config.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut wav = hound::WavWriter::new(writer, spec)?;
        for &sample in &self.recording {
            let clamped = sample.clamp(-1.0, 1.0);
            wav.write_sample((clamped * f32::from(i16::MAX)) as i16)?;
        }
        wav.finalize()?;
        log::debug!("tape: saved {} samples as WAV", self.recording.len());
        Ok(())
    }

    pub fn eject(&mut self) {
        log::debug!("tape: ejected");
        self.tape.clear();
        self.state = TransportState::Stopped;
        self.rewind();
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.tape.is_empty()
    }

    /// Start playback from the current position.
    pub fn play(&mut self) {
        self.set_state(TransportState::Playing);
    }

    /// Start a fresh recording. Any previous recording is discarded.
    pub fn record(&mut self) {
        self.recording.clear();
        self.set_state(TransportState::Recording);
    }

    pub fn stop(&mut self) {
        self.set_state(TransportState::Stopped);
    }

    pub fn rewind(&mut self) {
        self.position = 0;
        self.phase = 0;
    }

    #[must_use]
    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Playback position in samples.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn config(&self) -> TapeConfig {
        self.config
    }

    /// Recorded samples so far.
    #[must_use]
    pub fn recording(&self) -> &[f32] {
        &self.recording
    }

    /// Remove and return the recording.
    pub fn take_recording(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.recording)
    }

    /// Decode the recording into a BIT image.
    #[must_use]
    pub fn recording_as_bit(&self) -> BitTape {
        BitTape::decode(&self.recording, self.config.sample_rate)
    }

    fn set_state(&mut self, state: TransportState) {
        if self.state != state {
            log::debug!("tape: {} -> {}", self.state.name(), state.name());
            self.state = state;
        }
    }

    /// Advance one sample.
    fn step(&mut self) {
        match self.state {
            TransportState::Stopped => {}
            TransportState::Playing => {
                self.position += 1;
                if self.position >= self.tape.len() {
                    log::debug!("tape: end of tape at sample {}", self.position);
                    self.position = self.tape.len();
                    self.set_state(TransportState::Stopped);
                }
            }
            TransportState::Recording => {
                self.recording.push(self.output_level as f32);
            }
        }
    }
}

/// Linear interpolation from `from` Hz to `to` Hz.
fn resample(samples: &[f32], from: u32, to: u32) -> Vec<f32> {
    if from == to {
        return samples.to_vec();
    }
    if from == 0 || to == 0 {
        return Vec::new();
    }

    let (from, to) = (u64::from(from), u64::from(to));
    let len = samples.len() as u64 * to / from;
    (0..len)
        .map(|i| {
            let pos = i * from;
            let index = (pos / to) as usize;
            let frac = (pos % to) as f32 / to as f32;
            let a = samples[index];
            let b = samples.get(index + 1).copied().unwrap_or(a);
            a + (b - a) * frac
        })
        .collect()
}

impl Default for TapeDeck {
    fn default() -> Self {
        Self::new(TapeConfig::default())
    }
}

impl Cassette for TapeDeck {
    fn output(&mut self, level: f64) {
        self.output_level = level;
    }

    fn input(&self) -> f64 {
        if self.state != TransportState::Playing {
            return 0.0;
        }
        self.tape
            .get(self.position)
            .map_or(0.0, |&sample| f64::from(sample))
    }
}

impl Tickable for TapeDeck {
    fn tick(&mut self) {
        let frequency = self.config.clock.frequency_hz;
        if self.state == TransportState::Stopped || frequency == 0 {
            return;
        }
        self.phase += u64::from(self.config.sample_rate);
        while self.phase >= frequency && self.state != TransportState::Stopped {
            self.phase -= frequency;
            self.step();
        }
    }
}

impl Observable for TapeDeck {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "state" => Some(self.state.name().into()),
            "loaded" => Some(self.is_loaded().into()),
            "position" => Some(Value::U64(self.position as u64)),
            "length" => Some(Value::U64(self.tape.len() as u64)),
            "input" => Some(self.input().into()),
            "output" => Some(self.output_level.into()),
            "recorded" => Some(Value::U64(self.recording.len() as u64)),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "state", "loaded", "position", "length", "input", "output", "recorded",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emu_core::{MasterClock, Ticks};
    use std::io::Cursor;

    /// One tick per sample keeps the arithmetic obvious.
    fn deck() -> TapeDeck {
        TapeDeck::new(TapeConfig {
            clock: MasterClock::new(48_000),
            sample_rate: 48_000,
        })
    }

    #[test]
    fn stopped_deck_reads_silence() {
        let mut deck = deck();
        deck.insert_samples(vec![1.0, 1.0]);
        assert_eq!(deck.input(), 0.0);
        deck.tick();
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn playback_steps_one_sample_per_period() {
        let mut deck = deck();
        deck.insert_samples(vec![1.0, -1.0, 0.5]);
        deck.play();
        assert_eq!(deck.input(), 1.0);
        deck.tick();
        assert_eq!(deck.input(), -1.0);
        deck.tick();
        assert_eq!(deck.input(), 0.5);
    }

    #[test]
    fn end_of_tape_stops() {
        let mut deck = deck();
        deck.insert_samples(vec![1.0, 1.0]);
        deck.play();
        deck.tick_n(Ticks::new(5));
        assert_eq!(deck.state(), TransportState::Stopped);
        assert_eq!(deck.position(), 2);
        assert_eq!(deck.input(), 0.0);
    }

    #[test]
    fn master_clock_divides_down() {
        let mut deck = TapeDeck::new(TapeConfig {
            clock: MasterClock::new(3_579_545),
            sample_rate: 44_100,
        });
        deck.insert_samples(vec![0.0; 100_000]);
        deck.play();
        deck.tick_n(Ticks::new(3_579_545));
        assert_eq!(deck.position(), 44_100);
    }

    #[test]
    fn zero_clock_never_advances() {
        let mut deck = TapeDeck::new(TapeConfig {
            clock: MasterClock::new(0),
            sample_rate: 44_100,
        });
        deck.insert_samples(vec![1.0; 4]);
        deck.play();
        deck.tick_n(Ticks::new(10));
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn recording_captures_output_level() {
        let mut deck = deck();
        deck.record();
        deck.output(1.0);
        deck.tick_n(Ticks::new(2));
        deck.output(-1.0);
        deck.tick();
        assert_eq!(deck.recording(), &[1.0, 1.0, -1.0]);
        assert_eq!(deck.take_recording().len(), 3);
        assert!(deck.recording().is_empty());
    }

    #[test]
    fn load_bit_renders_at_deck_rate() {
        let mut deck = deck();
        deck.load_bit(b"10").expect("valid image");
        assert!(deck.is_loaded());
        deck.play();
        assert!(deck.input() > 0.0);
        deck.tick_n(Ticks::new(10));
        assert!(deck.input() < 0.0);
    }

    #[test]
    fn load_bit_rejects_garbage() {
        let mut deck = deck();
        assert!(deck.load_bit(b"01?").is_err());
        assert!(!deck.is_loaded());
    }

    #[test]
    fn recorded_bits_decode() {
        let mut deck = deck();
        let bits = BitTape::from_bits(vec![true, false, true]);
        deck.record();
        for sample in bits.to_samples(48_000) {
            deck.output(f64::from(sample));
            deck.tick();
        }
        assert_eq!(deck.recording_as_bit(), bits);
    }

    #[test]
    fn eject_clears_tape() {
        let mut deck = deck();
        deck.insert_samples(vec![1.0; 8]);
        deck.play();
        deck.tick();
        deck.eject();
        assert!(!deck.is_loaded());
        assert_eq!(deck.state(), TransportState::Stopped);
        assert_eq!(deck.position(), 0);
        assert_eq!(deck.query("state"), Some(Value::from("stopped")));
    }

    #[test]
    fn wav_round_trip_across_rates() {
        let bits = BitTape::from_bits(vec![true, false, false, true, true, false]);
        let mut recorder = deck();
        recorder.record();
        for sample in bits.to_samples(48_000) {
            recorder.output(f64::from(sample));
            recorder.tick();
        }

        let mut file = Cursor::new(Vec::new());
        recorder.save_wav(&mut file).expect("write WAV");

        let mut player = TapeDeck::default();
        player
            .load_wav(Cursor::new(file.into_inner()))
            .expect("read WAV");
        assert_eq!(player.tape.len(), recorder.recording().len() * 44_100 / 48_000);
        assert_eq!(BitTape::decode(&player.tape, 44_100), bits);
    }

    #[test]
    fn wav_stereo_mixes_to_mono() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 48_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut file = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut file, spec).expect("header");
            for _ in 0..4 {
                writer.write_sample(16_384_i16).expect("left");
                writer.write_sample(0_i16).expect("right");
            }
            writer.finalize().expect("finalize");
        }

        let mut deck = deck();
        deck.load_wav(Cursor::new(file.into_inner())).expect("read WAV");
        assert_eq!(deck.tape, vec![0.25; 4]);
        deck.play();
        assert_eq!(deck.input(), 0.25);
    }

    #[test]
    fn load_wav_rejects_garbage() {
        let mut deck = deck();
        assert!(deck.load_wav(Cursor::new(b"not a wav".to_vec())).is_err());
        assert!(!deck.is_loaded());
    }

    #[test]
    fn resample_halves_and_interpolates() {
        assert_eq!(resample(&[0.0, 1.0, 0.0, -1.0], 2, 1), vec![0.0, 0.0]);
        assert_eq!(resample(&[0.0, 1.0], 1, 2), vec![0.0, 0.5, 1.0, 1.0]);
        assert!(resample(&[1.0], 0, 44_100).is_empty());
    }
}
