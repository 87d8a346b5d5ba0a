//! SG-1000 / SC-3000 expansion slot.

use emu_core::Bus;

use crate::cassette::Cassette;
use crate::device::Sk1100;
use crate::matrix::RowProvider;
use crate::printer::PrinterPort;

/// A peripheral plugged into the expansion slot.
pub trait ExpansionDevice {
    fn peripheral_read(&mut self, offset: u8) -> u8;

    fn peripheral_write(&mut self, offset: u8, data: u8);

    /// Whether the device drives the data bus for a read at `offset`.
    fn is_readable(&self, offset: u8) -> bool;
}

impl<C, P, K> ExpansionDevice for Sk1100<C, P, K>
where
    C: Cassette,
    P: PrinterPort,
    K: RowProvider,
{
    fn peripheral_read(&mut self, offset: u8) -> u8 {
        self.read(offset)
    }

    fn peripheral_write(&mut self, offset: u8, data: u8) {
        self.write(offset, data);
    }

    fn is_readable(&self, offset: u8) -> bool {
        Sk1100::is_readable(self, offset)
    }
}

/// The expansion slot. Reads from an empty slot float high.
#[derive(Default)]
pub struct ExpansionSlot {
    device: Option<Box<dyn ExpansionDevice>>,
}

impl ExpansionSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plug in a device, returning whatever was there before.
    pub fn insert(&mut self, device: Box<dyn ExpansionDevice>) -> Option<Box<dyn ExpansionDevice>> {
        self.device.replace(device)
    }

    pub fn remove(&mut self) -> Option<Box<dyn ExpansionDevice>> {
        self.device.take()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.device.is_none()
    }

    /// Whether the slot drives the bus for a read at `offset`. An empty
    /// slot always does, with 0xFF.
    #[must_use]
    pub fn is_readable(&self, offset: u8) -> bool {
        self.device
            .as_ref()
            .is_none_or(|device| device.is_readable(offset))
    }
}

impl Bus for ExpansionSlot {
    fn read(&mut self, address: u16) -> u8 {
        match self.device.as_mut() {
            Some(device) => device.peripheral_read(address as u8),
            None => 0xFF,
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        if let Some(device) = self.device.as_mut() {
            device.peripheral_write(address as u8, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::NoCassette;
    use crate::config::Sk1100Model;
    use crate::printer::NoPrinter;

    #[test]
    fn empty_slot_floats_high() {
        let mut slot = ExpansionSlot::new();
        assert!(slot.is_empty());
        assert_eq!(slot.read(0xDC), 0xFF);
        assert!(slot.is_readable(0));
        slot.write(0xDF, 0x92);
    }

    #[test]
    fn keyboard_in_slot() {
        let mut slot = ExpansionSlot::new();
        let sk = Sk1100::new(Sk1100Model::Domestic, NoCassette, NoPrinter);
        assert!(slot.insert(Box::new(sk)).is_none());
        assert!(!slot.is_readable(0));

        // SC-3000 maps the PPI at $DC-$DF.
        slot.write(0xDF, 0x92);
        slot.write(0xDE, 0x07);
        assert!(!slot.is_readable(0));
        slot.write(0xDE, 0x00);
        assert!(slot.is_readable(0));
        assert_eq!(slot.read(0xDC), 0xFF);
        assert_eq!(slot.read(0xDF), 0x92);

        assert!(slot.remove().is_some());
        assert_eq!(slot.read(0xDC), 0xFF);
    }
}
