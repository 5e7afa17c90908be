use std::cell::Cell;

use super::TickSource;

/// Hand-driven tick source.
///
/// The counter only moves when told to, so exact durations (including ones
/// large enough to overflow an accumulator) can be replayed deterministically.
/// `Cell`-based: share it by reference with the timer and keep advancing it
/// from the outside.
#[derive(Debug, Default)]
pub struct ManualClock {
    ticks: Cell<u64>,
    frequency: u64,
}

impl ManualClock {
    /// Creates a clock at tick 0 running at `frequency` ticks per second.
    pub fn new(frequency: u64) -> Self {
        Self {
            ticks: Cell::new(0),
            frequency,
        }
    }

    /// Sets the current tick count.
    pub fn set(&self, ticks: u64) {
        self.ticks.set(ticks);
    }

    /// Moves the counter forward, wrapping at `u64::MAX` like a hardware counter.
    pub fn advance(&self, ticks: u64) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }
}

impl TickSource for ManualClock {
    #[inline]
    fn now(&self) -> u64 {
        self.ticks.get()
    }

    #[inline]
    fn frequency(&self) -> u64 {
        self.frequency
    }
}
