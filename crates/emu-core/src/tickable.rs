//! Trait for collaborators that advance with the host clock.

use crate::Ticks;

/// A collaborator that advances with the host's master clock.
///
/// Register-level devices are purely reactive and do not implement this.
/// Things with their own motion (a tape transport) do, and the host calls
/// them from its stepping loop.
pub trait Tickable {
    /// Advance by one master clock tick.
    fn tick(&mut self);

    /// Advance by `count` ticks.
    ///
    /// Implementations may override this for speed but must end in the
    /// same state as calling `tick()` `count` times.
    fn tick_n(&mut self, count: Ticks) {
        for _ in 0..count.get() {
            self.tick();
        }
    }
}
