//! SK-1100 save state.
//!
//! Binary layout:
//!
//! | Offset | Size | Field                          |
//! |--------|------|--------------------------------|
//! | 0      | 4    | Magic `SK11`                   |
//! | 4      | 1    | Version (1)                    |
//! | 5      | 1    | Key latch (0-7)                |
//! | 6      | 1    | PPI control word               |
//! | 7      | 3    | PPI output latches A, B, C     |

use std::fmt;

use intel_8255::PpiState;

pub const MAGIC: [u8; 4] = *b"SK11";
pub const VERSION: u8 = 1;
pub const SNAPSHOT_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    TooShort(usize),
    BadMagic([u8; 4]),
    UnsupportedVersion(u8),
    InvalidLatch(u8),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => write!(
                f,
                "SK-1100 snapshot too short: {len} bytes (expected {SNAPSHOT_SIZE})"
            ),
            Self::BadMagic(magic) => write!(f, "not an SK-1100 snapshot (magic {magic:02X?})"),
            Self::UnsupportedVersion(version) => {
                write!(f, "unsupported SK-1100 snapshot version {version}")
            }
            Self::InvalidLatch(latch) => write!(f, "invalid key latch {latch} (expected 0-7)"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Device state between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sk1100Snapshot {
    pub key_latch: u8,
    pub ppi: PpiState,
}

impl Sk1100Snapshot {
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(SNAPSHOT_SIZE);
        bytes.extend_from_slice(&MAGIC);
        bytes.push(VERSION);
        bytes.push(self.key_latch);
        bytes.push(self.ppi.control);
        bytes.extend_from_slice(&self.ppi.output);
        bytes
    }

    /// Decode a snapshot. Trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self, SnapshotError> {
        if data.len() < SNAPSHOT_SIZE {
            return Err(SnapshotError::TooShort(data.len()));
        }
        let magic = [data[0], data[1], data[2], data[3]];
        if magic != MAGIC {
            return Err(SnapshotError::BadMagic(magic));
        }
        if data[4] != VERSION {
            return Err(SnapshotError::UnsupportedVersion(data[4]));
        }
        let key_latch = data[5];
        if key_latch > 7 {
            return Err(SnapshotError::InvalidLatch(key_latch));
        }
        Ok(Self {
            key_latch,
            ppi: PpiState {
                control: data[6],
                output: [data[7], data[8], data[9]],
            },
        })
    }
}
