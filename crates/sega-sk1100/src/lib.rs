//! Sega SK-1100 keyboard for the SG-1000 / SC-3000 expansion slot.
//!
//! The keyboard is an 8255 PPI. Software writes a row number to port C,
//! then reads the row's keys back on ports A and B. The same PPI carries
//! the cassette jack and the printer connector.
//!
//! | Port | Bits | Use                                          |
//! |------|------|----------------------------------------------|
//! | A    | 0-7  | Key row, active low                          |
//! | B    | 0-3  | Key row, active low                          |
//! | B    | 4    | /CONT from the cartridge slot (always 1)     |
//! | B    | 5    | Printer /FAULT                               |
//! | B    | 6    | Printer BUSY                                 |
//! | B    | 7    | Cassette input                               |
//! | C    | 0-2  | Row select (7 = keyboard off)                |
//! | C    | 4    | Cassette output                              |
//! | C    | 5-7  | Printer DATA, /RESET, FEED                   |

pub mod cassette;
pub mod config;
mod device;
pub mod expansion;
pub mod input;
#[cfg(feature = "native")]
pub mod keyboard_map;
pub mod layout;
pub mod matrix;
pub mod printer;
pub mod snapshot;
pub mod tape;

pub use cassette::{Cassette, NoCassette};
pub use config::{Sk1100Model, TapeConfig};
pub use device::{
    PB_BUSY, PB_CASSETTE_IN, PB_CONT, PB_FAULT, PC_CASSETTE_OUT, PC_PRINTER_DATA,
    PC_PRINTER_FEED, PC_PRINTER_RESET, PC_ROW_MASK, Sk1100,
};
pub use expansion::{ExpansionDevice, ExpansionSlot};
pub use input::{InputEvent, InputQueue};
pub use layout::{HostKey, Layout, Sk1100Key};
pub use matrix::{KeyMatrix, RowProvider};
pub use printer::{NoPrinter, PrinterPort};
pub use snapshot::{Sk1100Snapshot, SnapshotError};
pub use tape::TapeDeck;
