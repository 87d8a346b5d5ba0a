//! Intel 8255 Programmable Peripheral Interface (PPI).
//!
//! Three 8-bit ports and a control register. Port C splits into two
//! nibbles with independent directions, and its bits can also be set or
//! cleared one at a time through the control register.
//!
//! # Registers ($0-$3)
//!
//! | Reg | Read                         | Write                         |
//! |-----|------------------------------|-------------------------------|
//! | $0  | Port A                       | Port A output latch           |
//! | $1  | Port B                       | Port B output latch           |
//! | $2  | Port C                       | Port C output latch           |
//! | $3  | Control word                 | Mode set (bit 7 = 1) or BSR   |
//!
//! # Control word (mode set, bit 7 = 1)
//!
//! | Bit | Meaning                                   |
//! |-----|-------------------------------------------|
//! | 6-5 | Group A mode (00 = 0, 01 = 1, 1x = 2)     |
//! | 4   | Port A direction (1 = input)              |
//! | 3   | Port C upper direction (1 = input)        |
//! | 2   | Group B mode (0 = 0, 1 = 1)               |
//! | 1   | Port B direction (1 = input)              |
//! | 0   | Port C lower direction (1 = input)        |
//!
//! With bit 7 clear, bits 3-1 select a port C bit and bit 0 is its new
//! value.
//!
//! # Standalone IC
//!
//! The chip owns no peripherals. Pin traffic goes through a [`PortIo`]
//! passed into each register access, so the owner can lend out the
//! devices wired to the ports without sharing them.
//!
//! Modes 1 and 2 are decoded and reported, but their strobe and interrupt
//! lines are not modelled: data moves as in mode 0.

use emu_core::{Observable, Value};

/// Control word loaded on reset: mode 0, every port an input.
pub const CONTROL_RESET: u8 = 0x9B;

const CTRL_MODE_SET: u8 = 0x80;
const CTRL_A_INPUT: u8 = 0x10;
const CTRL_C_UPPER_INPUT: u8 = 0x08;
const CTRL_B_MODE: u8 = 0x04;
const CTRL_B_INPUT: u8 = 0x02;
const CTRL_C_LOWER_INPUT: u8 = 0x01;

const C_UPPER: u8 = 0xF0;
const C_LOWER: u8 = 0x0F;

/// Devices wired to the PPI's port pins.
///
/// Reads are called when software reads a port configured as input.
/// Writes are called whenever the pins a port drives change, with input
/// pins reported high (unconnected TTL inputs float high).
pub trait PortIo {
    fn read_a(&mut self) -> u8 {
        0xFF
    }

    fn read_b(&mut self) -> u8 {
        0xFF
    }

    fn read_c(&mut self) -> u8 {
        0xFF
    }

    fn write_a(&mut self, _value: u8) {}

    fn write_b(&mut self, _value: u8) {}

    fn write_c(&mut self, _value: u8) {}
}

/// Nothing connected: inputs float high, outputs go nowhere.
impl PortIo for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
}

impl Port {
    const fn index(self) -> usize {
        match self {
            Port::A => 0,
            Port::B => 1,
            Port::C => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Operating mode of a port group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// Mode 0: basic input/output.
    Basic,
    /// Mode 1: strobed input/output.
    Strobed,
    /// Mode 2: bidirectional bus (group A only).
    Bidirectional,
}

impl GroupMode {
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            GroupMode::Basic => 0,
            GroupMode::Strobed => 1,
            GroupMode::Bidirectional => 2,
        }
    }
}

/// Register contents captured for save states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PpiState {
    pub control: u8,
    /// Output latches for ports A, B and C.
    pub output: [u8; 3],
}

impl Default for PpiState {
    fn default() -> Self {
        Self {
            control: CONTROL_RESET,
            output: [0; 3],
        }
    }
}

/// Intel 8255 PPI.
#[derive(Debug, Clone)]
pub struct Ppi8255 {
    /// Last mode-set control word.
    control: u8,
    /// Output latches for ports A, B and C.
    output: [u8; 3],
}

impl Ppi8255 {
    /// Create a PPI in its reset state. Nothing is driven until
    /// [`reset`](Self::reset) or a register write.
    #[must_use]
    pub fn new() -> Self {
        Self {
            control: CONTROL_RESET,
            output: [0; 3],
        }
    }

    /// Hardware reset: reload the reset control word and drive the pins.
    pub fn reset(&mut self, io: &mut impl PortIo) {
        self.set_mode(CONTROL_RESET, io);
    }

    /// Read a register. Only the low two bits of `offset` are decoded.
    pub fn read(&mut self, offset: u8, io: &mut impl PortIo) -> u8 {
        match offset & 0x03 {
            0 => match self.direction(Port::A) {
                Direction::Input => io.read_a(),
                Direction::Output => self.output[0],
            },
            1 => match self.direction(Port::B) {
                Direction::Input => io.read_b(),
                Direction::Output => self.output[1],
            },
            2 => {
                let mask = self.port_c_output_mask();
                let mut data = self.output[2] & mask;
                if mask != 0xFF {
                    data |= io.read_c() & !mask;
                }
                data
            }
            _ => self.control,
        }
    }

    /// Write a register. Only the low two bits of `offset` are decoded.
    pub fn write(&mut self, offset: u8, value: u8, io: &mut impl PortIo) {
        log::trace!("8255 write {:X} <- {value:02X}", offset & 0x03);
        match offset & 0x03 {
            0 => {
                if self.direction(Port::A) == Direction::Output {
                    self.output[0] = value;
                    io.write_a(value);
                }
            }
            1 => {
                if self.direction(Port::B) == Direction::Output {
                    self.output[1] = value;
                    io.write_b(value);
                }
            }
            2 => {
                self.output[2] = value;
                self.drive_c(io);
            }
            _ => {
                if value & CTRL_MODE_SET != 0 {
                    self.set_mode(value, io);
                } else {
                    self.set_reset_c_bit(value, io);
                }
            }
        }
    }

    /// Current control word.
    #[must_use]
    pub fn control(&self) -> u8 {
        self.control
    }

    /// Direction of a whole port. Port C reports its upper half; see
    /// [`port_c_directions`](Self::port_c_directions) for both halves.
    #[must_use]
    pub fn direction(&self, port: Port) -> Direction {
        let bit = match port {
            Port::A => CTRL_A_INPUT,
            Port::B => CTRL_B_INPUT,
            Port::C => CTRL_C_UPPER_INPUT,
        };
        if self.control & bit != 0 {
            Direction::Input
        } else {
            Direction::Output
        }
    }

    /// Directions of port C's (upper, lower) halves.
    #[must_use]
    pub fn port_c_directions(&self) -> (Direction, Direction) {
        let lower = if self.control & CTRL_C_LOWER_INPUT != 0 {
            Direction::Input
        } else {
            Direction::Output
        };
        (self.direction(Port::C), lower)
    }

    #[must_use]
    pub fn group_a_mode(&self) -> GroupMode {
        match (self.control >> 5) & 0x03 {
            0 => GroupMode::Basic,
            1 => GroupMode::Strobed,
            _ => GroupMode::Bidirectional,
        }
    }

    #[must_use]
    pub fn group_b_mode(&self) -> GroupMode {
        if self.control & CTRL_B_MODE != 0 {
            GroupMode::Strobed
        } else {
            GroupMode::Basic
        }
    }

    /// Output latch of a port (what it drives when configured as output).
    #[must_use]
    pub fn output_latch(&self, port: Port) -> u8 {
        self.output[port.index()]
    }

    /// Levels on the port C pins as seen by the attached devices.
    #[must_use]
    pub fn port_c_pins(&self) -> u8 {
        let mask = self.port_c_output_mask();
        (self.output[2] & mask) | !mask
    }

    #[must_use]
    pub fn save_state(&self) -> PpiState {
        PpiState {
            control: self.control,
            output: self.output,
        }
    }

    /// Restore registers. Pins are not re-driven.
    pub fn load_state(&mut self, state: &PpiState) {
        self.control = state.control | CTRL_MODE_SET;
        self.output = state.output;
    }

    // --- Internal helpers ---

    fn port_c_output_mask(&self) -> u8 {
        let mut mask = 0;
        if self.control & CTRL_C_UPPER_INPUT == 0 {
            mask |= C_UPPER;
        }
        if self.control & CTRL_C_LOWER_INPUT == 0 {
            mask |= C_LOWER;
        }
        mask
    }

    fn set_mode(&mut self, control: u8, io: &mut impl PortIo) {
        log::debug!("8255 mode set {control:02X}");
        self.control = control;
        self.output = [0; 3];

        if self.direction(Port::A) == Direction::Output {
            io.write_a(0);
        }
        if self.direction(Port::B) == Direction::Output {
            io.write_b(0);
        }
        self.drive_c(io);
    }

    fn set_reset_c_bit(&mut self, value: u8, io: &mut impl PortIo) {
        let bit = (value >> 1) & 0x07;
        if value & 0x01 != 0 {
            self.output[2] |= 1 << bit;
        } else {
            self.output[2] &= !(1 << bit);
        }
        self.drive_c(io);
    }

    fn drive_c(&self, io: &mut impl PortIo) {
        io.write_c(self.port_c_pins());
    }
}

impl Default for Ppi8255 {
    fn default() -> Self {
        Self::new()
    }
}

fn is_input(direction: Direction) -> bool {
    direction == Direction::Input
}

impl Observable for Ppi8255 {
    fn query(&self, path: &str) -> Option<Value> {
        let (c_upper, c_lower) = self.port_c_directions();
        match path {
            "control" => Some(self.control.into()),
            "group_a.mode" => Some(self.group_a_mode().number().into()),
            "group_b.mode" => Some(self.group_b_mode().number().into()),
            "port_a.input" => Some(is_input(self.direction(Port::A)).into()),
            "port_b.input" => Some(is_input(self.direction(Port::B)).into()),
            "port_c.upper_input" => Some(is_input(c_upper).into()),
            "port_c.lower_input" => Some(is_input(c_lower).into()),
            "port_a.output" => Some(self.output[0].into()),
            "port_b.output" => Some(self.output[1].into()),
            "port_c.output" => Some(self.output[2].into()),
            "port_c.pins" => Some(self.port_c_pins().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "control",
            "group_a.mode",
            "group_b.mode",
            "port_a.input",
            "port_b.input",
            "port_c.upper_input",
            "port_c.lower_input",
            "port_a.output",
            "port_b.output",
            "port_c.output",
            "port_c.pins",
        ]
    }
}
