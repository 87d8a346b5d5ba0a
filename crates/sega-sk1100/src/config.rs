//! SK-1100 configuration: keyboard variant and tape deck timing.

use emu_core::MasterClock;

use crate::layout::{DOMESTIC, EXPORT, Layout};

/// SK-1100 keyboard variant.
///
/// Both variants are electrically identical. Only the key legends and the
/// alternate character layer differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sk1100Model {
    /// Japanese keyboard with katakana legends.
    #[default]
    Domestic,
    /// Export keyboard with accented letters in place of katakana.
    Export,
}

impl Sk1100Model {
    #[must_use]
    pub const fn device_name(self) -> &'static str {
        match self {
            Self::Domestic => "sega_sk1100",
            Self::Export => "sega_sk1100e",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Domestic => "Sega SK-1100 Keyboard",
            Self::Export => "Sega SK-1100 Keyboard (with diaereses)",
        }
    }

    #[must_use]
    pub fn layout(self) -> &'static Layout {
        match self {
            Self::Domestic => &DOMESTIC,
            Self::Export => &EXPORT,
        }
    }
}

/// NTSC SC-3000 master clock (Hz).
pub const NTSC_CLOCK_HZ: u64 = 3_579_545;
/// PAL SC-3000 master clock (Hz).
pub const PAL_CLOCK_HZ: u64 = 3_546_895;
/// Default tape sampling rate (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Timing for a [`TapeDeck`](crate::tape::TapeDeck).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapeConfig {
    /// Rate at which the host ticks the deck.
    pub clock: MasterClock,
    /// Waveform sample rate.
    pub sample_rate: u32,
}

impl TapeConfig {
    #[must_use]
    pub const fn ntsc() -> Self {
        Self {
            clock: MasterClock::new(NTSC_CLOCK_HZ),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }

    #[must_use]
    pub const fn pal() -> Self {
        Self {
            clock: MasterClock::new(PAL_CLOCK_HZ),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl Default for TapeConfig {
    fn default() -> Self {
        Self::ntsc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AltMode;

    #[test]
    fn model_names() {
        assert_eq!(Sk1100Model::Domestic.device_name(), "sega_sk1100");
        assert_eq!(Sk1100Model::Export.device_name(), "sega_sk1100e");
        assert!(Sk1100Model::Export.description().contains("diaereses"));
    }

    #[test]
    fn model_layouts() {
        assert_eq!(Sk1100Model::Domestic.layout().alt_mode, AltMode::Lock);
        assert_eq!(Sk1100Model::Export.layout().alt_mode, AltMode::Hold);
        assert_eq!(Sk1100Model::Export.layout().name, "sega_sk1100e");
    }

    #[test]
    fn tape_defaults() {
        let config = TapeConfig::default();
        assert_eq!(config.clock.frequency_hz, 3_579_545);
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(TapeConfig::pal().clock.frequency_hz, 3_546_895);
    }
}
