//! Register-level bus interface.

/// Register-level bus interface.
///
/// The host decodes its I/O space and hands the device a local address.
/// Devices decode whatever address bits they wire up and ignore the rest,
/// so any address is a valid argument.
pub trait Bus {
    /// Read the register at `address`. Reads may have side effects.
    fn read(&mut self, address: u16) -> u8;

    /// Write `value` to the register at `address`.
    fn write(&mut self, address: u16, value: u8);
}
