//! PPI driven through its public interface, the way a host wires it: a
//! keypad on ports A and B, row select on the lower half of port C and a
//! status LED on the upper half.

use emu_core::{Observable, Value};
use intel_8255::{Direction, Port, PortIo, Ppi8255};

#[derive(Default)]
struct Keypad {
    /// Pressed-key masks per row, active high.
    rows: [u8; 4],
    row: u8,
    led: bool,
}

impl PortIo for Keypad {
    fn read_a(&mut self) -> u8 {
        !self.rows[usize::from(self.row & 0x03)]
    }

    fn read_b(&mut self) -> u8 {
        0x5A
    }

    fn write_c(&mut self, value: u8) {
        self.row = value & 0x0F;
        self.led = value & 0x80 != 0;
    }
}

#[test]
fn scan_rows_through_port_c() {
    let mut ppi = Ppi8255::new();
    let mut pad = Keypad::default();
    pad.rows[2] = 0x11;

    ppi.write(3, 0x92, &mut pad);
    assert_eq!(ppi.direction(Port::A), Direction::Input);
    assert_eq!(ppi.port_c_directions(), (Direction::Output, Direction::Output));

    ppi.write(2, 0x02, &mut pad);
    assert_eq!(ppi.read(0, &mut pad), 0xEE);
    ppi.write(2, 0x01, &mut pad);
    assert_eq!(ppi.read(0, &mut pad), 0xFF);
    assert_eq!(ppi.read(1, &mut pad), 0x5A);
}

#[test]
fn led_by_bit_set_reset() {
    let mut ppi = Ppi8255::new();
    let mut pad = Keypad::default();
    ppi.write(3, 0x92, &mut pad);

    ppi.write(3, 0x0F, &mut pad); // set PC7
    assert!(pad.led);
    assert_eq!(ppi.query("port_c.output"), Some(Value::U8(0x80)));

    ppi.write(3, 0x0E, &mut pad); // clear PC7
    assert!(!pad.led);
}

#[test]
fn reset_floats_port_c() {
    let mut ppi = Ppi8255::new();
    let mut pad = Keypad::default();
    ppi.write(3, 0x80, &mut pad);
    ppi.write(2, 0x00, &mut pad);
    assert!(!pad.led);

    ppi.reset(&mut pad);
    assert!(pad.led);
    assert_eq!(pad.row, 0x0F);
    assert_eq!(ppi.port_c_pins(), 0xFF);
}
