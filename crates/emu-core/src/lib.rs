//! Core traits and types for register-level peripheral emulation.
//!
//! Peripherals never own the host. They answer register accesses through
//! [`Bus`], expose their state through [`Observable`], and anything that
//! moves on its own (a tape transport) advances through [`Tickable`] at the
//! host's [`MasterClock`] rate.

mod bus;
mod clock;
mod observable;
mod tickable;
mod ticks;

pub use bus::Bus;
pub use clock::MasterClock;
pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
