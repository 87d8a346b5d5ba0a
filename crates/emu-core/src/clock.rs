//! Master clock configuration.

/// Master clock of the host system.
///
/// Clocked collaborators (a tape transport) tick at this rate and derive
/// their own slower rates from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterClock {
    /// Crystal frequency in Hz (e.g., `3_579_545` for an NTSC SC-3000).
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }
}
