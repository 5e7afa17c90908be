//! Tick sources.
//!
//! The timer never talks to the platform directly. It samples a `TickSource`,
//! which supplies two primitives:
//! - `now()`: a raw, monotonic tick count, cheap enough to call in hot code
//! - `frequency()`: ticks per second, queried once at calibration
//!
//! `MonotonicClock` is the production source. `ManualClock` is a fake whose
//! tick counter is driven by hand, for tests and simulations.

mod manual;
mod monotonic;

pub use manual::ManualClock;
pub use monotonic::MonotonicClock;

/// High-resolution tick counter.
pub trait TickSource {
    /// Current raw tick count.
    fn now(&self) -> u64;

    /// Ticks per second.
    fn frequency(&self) -> u64;
}

impl<C: TickSource + ?Sized> TickSource for &C {
    #[inline]
    fn now(&self) -> u64 {
        (**self).now()
    }

    #[inline]
    fn frequency(&self) -> u64 {
        (**self).frequency()
    }
}
