//! SK-1100 printer connector.
//!
//! | Line   | Port | Direction |
//! |--------|------|-----------|
//! | DATA   | PC5  | out       |
//! | /RESET | PC6  | out       |
//! | FEED   | PC7  | out       |
//! | /FAULT | PB5  | in        |
//! | BUSY   | PB6  | in        |

/// A device on the printer connector.
///
/// Outputs are raw line levels from port C. They are driven on every port C
/// update, changed or not.
pub trait PrinterPort {
    /// Fault condition. Reported on PB5 active low.
    fn fault(&self) -> bool;

    fn busy(&self) -> bool;

    fn write_data(&mut self, level: bool);

    fn write_reset(&mut self, level: bool);

    fn write_feed(&mut self, level: bool);
}

/// Empty connector. Both status lines float high: no fault, busy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrinter;

impl PrinterPort for NoPrinter {
    fn fault(&self) -> bool {
        false
    }

    fn busy(&self) -> bool {
        true
    }

    fn write_data(&mut self, _level: bool) {}

    fn write_reset(&mut self, _level: bool) {}

    fn write_feed(&mut self, _level: bool) {}
}
