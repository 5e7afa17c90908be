use anyhow::Result;

use crate::clock::TickSource;

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Tick-to-microsecond conversion factor.
///
/// Computed once from the clock frequency and read on every report.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ClockCalibration {
    ticks_per_micro: u64,
}

impl ClockCalibration {
    /// Derives the factor from a frequency in ticks per second (truncating).
    ///
    /// Clocks slower than 1 MHz are rejected: they would yield a zero factor.
    pub fn from_frequency(frequency: u64) -> Result<Self> {
        let ticks_per_micro = frequency / MICROS_PER_SECOND;
        anyhow::ensure!(
            ticks_per_micro > 0,
            "clock frequency {frequency} Hz is below 1 MHz and cannot resolve microseconds"
        );
        Ok(Self { ticks_per_micro })
    }

    /// Queries `clock` for its frequency.
    pub fn measure<C: TickSource>(clock: &C) -> Result<Self> {
        Self::from_frequency(clock.frequency())
    }

    #[inline]
    pub fn ticks_per_micro(self) -> u64 {
        self.ticks_per_micro
    }

    /// Converts a tick count to whole microseconds (truncating).
    #[inline]
    pub fn to_micros(self, ticks: u64) -> u64 {
        ticks / self.ticks_per_micro
    }
}
