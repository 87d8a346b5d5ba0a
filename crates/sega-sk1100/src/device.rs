//! The SK-1100 keyboard adapter.
//!
//! An 8255 PPI with its ports wired to the key matrix, the cassette jack
//! and the printer connector. The host sees only the four PPI registers.

use emu_core::{Observable, Value};
use intel_8255::{PortIo, Ppi8255};

use crate::cassette::{Cassette, OUTPUT_HIGH, OUTPUT_LOW};
use crate::config::Sk1100Model;
use crate::layout::Sk1100Key;
use crate::matrix::{DISABLED_ROW, KeyMatrix, PORT_B_KEY_MASK, RowProvider};
use crate::printer::PrinterPort;
use crate::snapshot::Sk1100Snapshot;

/// PB4: cartridge /CONT contact, always high.
pub const PB_CONT: u8 = 0x10;
/// PB5: printer /FAULT.
pub const PB_FAULT: u8 = 0x20;
/// PB6: printer BUSY.
pub const PB_BUSY: u8 = 0x40;
/// PB7: cassette input.
pub const PB_CASSETTE_IN: u8 = 0x80;

/// PC0-PC2: keyboard row select.
pub const PC_ROW_MASK: u8 = 0x07;
/// PC4: cassette output.
pub const PC_CASSETTE_OUT: u8 = 0x10;
/// PC5: printer DATA.
pub const PC_PRINTER_DATA: u8 = 0x20;
/// PC6: printer /RESET.
pub const PC_PRINTER_RESET: u8 = 0x40;
/// PC7: printer FEED.
pub const PC_PRINTER_FEED: u8 = 0x80;

/// Everything on the PPI's pins.
///
/// Kept apart from the PPI so register accesses can lend it out while the
/// PPI itself is borrowed mutably.
#[derive(Debug)]
struct Lines<C, P, K> {
    key_latch: u8,
    /// Last value driven on port C.
    port_c: u8,
    keys: K,
    cassette: C,
    printer: P,
}

impl<C: Cassette, P: PrinterPort, K: RowProvider> Lines<C, P, K> {
    /// Row 7 selects no row, whatever the provider reports.
    fn port_a(&self) -> u8 {
        if self.key_latch == DISABLED_ROW {
            return 0xFF;
        }
        self.keys.row_a(self.key_latch)
    }

    fn port_b(&self) -> u8 {
        let keys = if self.key_latch == DISABLED_ROW {
            PORT_B_KEY_MASK
        } else {
            self.keys.row_b(self.key_latch) & PORT_B_KEY_MASK
        };
        let mut value = keys | PB_CONT;
        if !self.printer.fault() {
            value |= PB_FAULT;
        }
        if self.printer.busy() {
            value |= PB_BUSY;
        }
        if self.cassette.input() > 0.0 {
            value |= PB_CASSETTE_IN;
        }
        value
    }

    fn drive_port_c(&mut self, value: u8) {
        log::trace!("SK-1100 port C <- {value:02X}");
        self.port_c = value;
        self.key_latch = value & PC_ROW_MASK;
        self.cassette.output(if value & PC_CASSETTE_OUT != 0 {
            OUTPUT_HIGH
        } else {
            OUTPUT_LOW
        });
        self.printer.write_data(value & PC_PRINTER_DATA != 0);
        self.printer.write_reset(value & PC_PRINTER_RESET != 0);
        self.printer.write_feed(value & PC_PRINTER_FEED != 0);
    }
}

impl<C: Cassette, P: PrinterPort, K: RowProvider> PortIo for Lines<C, P, K> {
    fn read_a(&mut self) -> u8 {
        self.port_a()
    }

    fn read_b(&mut self) -> u8 {
        self.port_b()
    }

    fn write_c(&mut self, value: u8) {
        self.drive_port_c(value);
    }
}

/// Sega SK-1100 keyboard peripheral.
///
/// Generic over its collaborators. `K` defaults to [`KeyMatrix`]; a host
/// input layer can supply its own [`RowProvider`] instead.
#[derive(Debug)]
pub struct Sk1100<C, P, K = KeyMatrix> {
    model: Sk1100Model,
    ppi: Ppi8255,
    lines: Lines<C, P, K>,
}

impl<C: Cassette, P: PrinterPort> Sk1100<C, P> {
    /// Create a keyboard with no keys held, already reset.
    #[must_use]
    pub fn new(model: Sk1100Model, cassette: C, printer: P) -> Self {
        Self::with_rows(model, cassette, printer, KeyMatrix::new())
    }

    pub fn press_key(&mut self, key: Sk1100Key) {
        self.lines.keys.press(key);
    }

    pub fn release_key(&mut self, key: Sk1100Key) {
        self.lines.keys.release(key);
    }

    pub fn release_all_keys(&mut self) {
        self.lines.keys.release_all();
    }
}

impl<C: Cassette, P: PrinterPort, K: RowProvider> Sk1100<C, P, K> {
    /// Create a keyboard reading its rows from `keys`, already reset.
    #[must_use]
    pub fn with_rows(model: Sk1100Model, cassette: C, printer: P, keys: K) -> Self {
        let mut device = Self {
            model,
            ppi: Ppi8255::new(),
            lines: Lines {
                key_latch: 0,
                port_c: 0,
                keys,
                cassette,
                printer,
            },
        };
        device.reset();
        device
    }

    /// Reset the PPI. Port C floats high, so the row latch ends at 7 and
    /// the keyboard stays silent until software programs the PPI.
    pub fn reset(&mut self) {
        self.ppi.reset(&mut self.lines);
    }

    /// Register read. Only the low two address bits are decoded.
    pub fn read(&mut self, offset: u8) -> u8 {
        self.ppi.read(offset & 0x03, &mut self.lines)
    }

    /// Register write. Only the low two address bits are decoded.
    pub fn write(&mut self, offset: u8, value: u8) {
        self.ppi.write(offset & 0x03, value, &mut self.lines);
    }

    /// Port A as the PPI sees it: the selected port A row.
    #[must_use]
    pub fn port_a_read(&self) -> u8 {
        self.lines.port_a()
    }

    /// Port B as the PPI sees it:
    ///
    /// | Bit | Source                              |
    /// |-----|-------------------------------------|
    /// | 0-3 | Selected port B row                 |
    /// | 4   | /CONT, always 1                     |
    /// | 5   | Printer /FAULT (1 = no fault)       |
    /// | 6   | Printer BUSY                        |
    /// | 7   | Cassette input above 0.0            |
    #[must_use]
    pub fn port_b_read(&self) -> u8 {
        self.lines.port_b()
    }

    /// Drive the port C lines directly, as the PPI would.
    pub fn port_c_write(&mut self, value: u8) {
        self.lines.drive_port_c(value);
    }

    /// Currently selected keyboard row.
    #[must_use]
    pub fn key_latch(&self) -> u8 {
        self.lines.key_latch
    }

    /// Whether the keyboard answers reads. The offset is not decoded.
    #[must_use]
    pub fn is_readable(&self, _offset: u8) -> bool {
        self.lines.key_latch != DISABLED_ROW
    }

    #[must_use]
    pub fn model(&self) -> Sk1100Model {
        self.model
    }

    #[must_use]
    pub fn ppi(&self) -> &Ppi8255 {
        &self.ppi
    }

    #[must_use]
    pub fn keys(&self) -> &K {
        &self.lines.keys
    }

    pub fn keys_mut(&mut self) -> &mut K {
        &mut self.lines.keys
    }

    #[must_use]
    pub fn cassette(&self) -> &C {
        &self.lines.cassette
    }

    pub fn cassette_mut(&mut self) -> &mut C {
        &mut self.lines.cassette
    }

    #[must_use]
    pub fn printer(&self) -> &P {
        &self.lines.printer
    }

    pub fn printer_mut(&mut self) -> &mut P {
        &mut self.lines.printer
    }

    /// Capture the row latch and PPI registers.
    #[must_use]
    pub fn snapshot(&self) -> Sk1100Snapshot {
        Sk1100Snapshot {
            key_latch: self.lines.key_latch,
            ppi: self.ppi.save_state(),
        }
    }

    /// Restore a snapshot. Collaborators are not re-driven: the cassette
    /// and printer keep whatever levels they last saw.
    pub fn restore(&mut self, snapshot: &Sk1100Snapshot) {
        log::debug!(
            "SK-1100 restore: latch {} control {:02X}",
            snapshot.key_latch,
            snapshot.ppi.control
        );
        self.lines.key_latch = snapshot.key_latch & PC_ROW_MASK;
        self.ppi.load_state(&snapshot.ppi);
        self.lines.port_c = self.ppi.port_c_pins();
    }
}

impl<C: Cassette, P: PrinterPort, K: RowProvider> Observable for Sk1100<C, P, K> {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("ppi.") {
            return self.ppi.query(rest);
        }
        let port_c = self.lines.port_c;
        let cassette_out = if port_c & PC_CASSETTE_OUT != 0 {
            OUTPUT_HIGH
        } else {
            OUTPUT_LOW
        };
        match path {
            "model" => Some(self.model.device_name().into()),
            "key_latch" => Some(self.lines.key_latch.into()),
            "readable" => Some((self.lines.key_latch != DISABLED_ROW).into()),
            "port_a" => Some(self.port_a_read().into()),
            "port_b" => Some(self.port_b_read().into()),
            "port_c" => Some(port_c.into()),
            "cassette.output" => Some(cassette_out.into()),
            "cassette.input" => Some(self.lines.cassette.input().into()),
            "printer.fault" => Some(self.lines.printer.fault().into()),
            "printer.busy" => Some(self.lines.printer.busy().into()),
            "printer.data" => Some((port_c & PC_PRINTER_DATA != 0).into()),
            "printer.reset" => Some((port_c & PC_PRINTER_RESET != 0).into()),
            "printer.feed" => Some((port_c & PC_PRINTER_FEED != 0).into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "model",
            "key_latch",
            "readable",
            "port_a",
            "port_b",
            "port_c",
            "cassette.output",
            "cassette.input",
            "printer.fault",
            "printer.busy",
            "printer.data",
            "printer.reset",
            "printer.feed",
            "ppi.control",
            "ppi.group_a.mode",
            "ppi.group_b.mode",
            "ppi.port_a.input",
            "ppi.port_b.input",
            "ppi.port_c.upper_input",
            "ppi.port_c.lower_input",
            "ppi.port_a.output",
            "ppi.port_b.output",
            "ppi.port_c.output",
            "ppi.port_c.pins",
        ]
    }
}
