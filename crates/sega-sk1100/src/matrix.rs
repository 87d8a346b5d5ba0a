//! SK-1100 key matrix.
//!
//! The keyboard is scanned one row at a time. Port C bits 0-2 select a
//! row; the PPI then reads that row's keys on port A (eight columns) and
//! the low nibble of port B (four columns). Reads are active low.
//!
//! Row 7 has no keys: selecting it is how software turns keyboard
//! reporting off and frees the bus for other expansion devices.

use crate::layout::Sk1100Key;

/// Number of selectable rows.
pub const ROWS: usize = 8;
/// The row with no keys wired to it.
pub const DISABLED_ROW: u8 = 7;
/// Port B columns carrying keys.
pub const PORT_B_KEY_MASK: u8 = 0x0F;

/// Which PPI input port a key column is read on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanPort {
    A,
    B,
}

/// A key's place in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    pub port: ScanPort,
    /// Row select value (0-6).
    pub row: u8,
    /// Bit within the port (0-7 on port A, 0-3 on port B).
    pub bit: u8,
}

impl KeyPosition {
    #[must_use]
    pub const fn new(port: ScanPort, row: u8, bit: u8) -> Self {
        Self { port, row, bit }
    }

    /// Whether the position exists on the keyboard.
    #[must_use]
    pub const fn is_wired(self) -> bool {
        let bits = match self.port {
            ScanPort::A => 8,
            ScanPort::B => 4,
        };
        self.row < DISABLED_ROW && self.bit < bits
    }
}

/// Supplies the active-low key state of a selected row.
///
/// The device is generic over this so a host input layer can answer row
/// reads directly instead of mirroring its state into a [`KeyMatrix`].
pub trait RowProvider {
    /// Port A value for `row` (0 = pressed).
    fn row_a(&self, row: u8) -> u8;

    /// Port B value for `row`: key state in bits 0-3, bits 4-7 clear.
    fn row_b(&self, row: u8) -> u8;
}

/// Key state as per-row bitmasks.
///
/// Internally stores 1 = pressed. [`RowProvider`] reads invert to the
/// active-low levels the PPI sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatrix {
    rows_a: [u8; ROWS],
    rows_b: [u8; ROWS],
}

impl KeyMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the key at `position`. Unwired positions are ignored.
    pub fn set_key(&mut self, position: KeyPosition, pressed: bool) {
        if !position.is_wired() {
            return;
        }
        let row = match position.port {
            ScanPort::A => &mut self.rows_a[position.row as usize],
            ScanPort::B => &mut self.rows_b[position.row as usize],
        };
        if pressed {
            *row |= 1 << position.bit;
        } else {
            *row &= !(1 << position.bit);
        }
    }

    pub fn press(&mut self, key: Sk1100Key) {
        self.set_key(key.position(), true);
    }

    pub fn release(&mut self, key: Sk1100Key) {
        self.set_key(key.position(), false);
    }

    #[must_use]
    pub fn is_pressed(&self, key: Sk1100Key) -> bool {
        let position = key.position();
        let row = match position.port {
            ScanPort::A => self.rows_a[position.row as usize],
            ScanPort::B => self.rows_b[position.row as usize],
        };
        row & (1 << position.bit) != 0
    }

    pub fn release_all(&mut self) {
        self.rows_a = [0; ROWS];
        self.rows_b = [0; ROWS];
    }
}

impl RowProvider for KeyMatrix {
    fn row_a(&self, row: u8) -> u8 {
        let row = row & 0x07;
        if row == DISABLED_ROW {
            return 0xFF;
        }
        !self.rows_a[row as usize]
    }

    fn row_b(&self, row: u8) -> u8 {
        let row = row & 0x07;
        if row == DISABLED_ROW {
            return PORT_B_KEY_MASK;
        }
        !self.rows_b[row as usize] & PORT_B_KEY_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_pressed() {
        let keys = KeyMatrix::new();
        for row in 0..8 {
            assert_eq!(keys.row_a(row), 0xFF);
            assert_eq!(keys.row_b(row), 0x0F);
        }
    }

    #[test]
    fn port_a_key_pulls_its_bit_low() {
        let mut keys = KeyMatrix::new();
        keys.press(Sk1100Key::Z); // PA row 0, bit 3
        assert_eq!(keys.row_a(0), 0xF7);
        assert_eq!(keys.row_a(1), 0xFF);
        assert_eq!(keys.row_b(0), 0x0F);
    }

    #[test]
    fn port_b_key_pulls_its_bit_low() {
        let mut keys = KeyMatrix::new();
        keys.press(Sk1100Key::Shift); // PB row 6, bit 3
        assert_eq!(keys.row_b(6), 0x07);
        assert_eq!(keys.row_a(6), 0xFF);
    }

    #[test]
    fn row_7_never_reports() {
        let mut keys = KeyMatrix::new();
        keys.set_key(KeyPosition::new(ScanPort::A, 7, 0), true);
        keys.set_key(KeyPosition::new(ScanPort::B, 7, 0), true);
        assert_eq!(keys.row_a(7), 0xFF);
        assert_eq!(keys.row_b(7), 0x0F);
        assert_eq!(keys, KeyMatrix::new());
    }

    #[test]
    fn port_b_high_columns_are_unwired() {
        let mut keys = KeyMatrix::new();
        keys.set_key(KeyPosition::new(ScanPort::B, 0, 4), true);
        assert_eq!(keys, KeyMatrix::new());
    }

    #[test]
    fn row_select_masked_to_three_bits() {
        let mut keys = KeyMatrix::new();
        keys.press(Sk1100Key::N2); // PA row 1, bit 0
        assert_eq!(keys.row_a(0x09), 0xFE);
    }

    #[test]
    fn release_and_release_all() {
        let mut keys = KeyMatrix::new();
        keys.press(Sk1100Key::A);
        keys.press(Sk1100Key::Break);
        assert!(keys.is_pressed(Sk1100Key::A));

        keys.release(Sk1100Key::A);
        assert!(!keys.is_pressed(Sk1100Key::A));
        assert!(keys.is_pressed(Sk1100Key::Break));

        keys.release_all();
        assert_eq!(keys, KeyMatrix::new());
    }

    #[test]
    fn every_key_has_a_unique_wired_position() {
        let mut seen = std::collections::HashSet::new();
        for key in Sk1100Key::ALL {
            let position = key.position();
            assert!(position.is_wired(), "{key:?} is not wired");
            assert!(seen.insert(position), "{key:?} shares a position");
        }
    }
}
