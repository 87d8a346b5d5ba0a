//! Cassette interface.
//!
//! Port C bit 4 drives the recorder's input at ±1.0. Port B bit 7 reads
//! the player's output, 1 when the level is above zero.

/// Level driven for a set port C bit 4.
pub const OUTPUT_HIGH: f64 = 1.0;
/// Level driven for a clear port C bit 4.
pub const OUTPUT_LOW: f64 = -1.0;

/// Analog tape line.
pub trait Cassette {
    /// Drive the record line.
    fn output(&mut self, level: f64);

    /// Current playback level.
    fn input(&self) -> f64;
}

/// No recorder connected: output is dropped, input reads silence.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCassette;

impl Cassette for NoCassette {
    fn output(&mut self, _level: f64) {}

    fn input(&self) -> f64 {
        0.0
    }
}
