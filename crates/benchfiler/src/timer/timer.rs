use std::io::{self, Write};

use anyhow::{Context, Result};

use crate::clock::TickSource;

use super::calibration::ClockCalibration;
use super::config::TimerConfig;
use super::report::Report;
use super::state::RegionState;

/// Single-region timer.
///
/// Usage is a strict cycle: `begin()` / `end()` around the measured code as
/// many times as needed, then `report()` to print the summary and start over.
///
/// Only one region can be in flight. Nested or interleaved `begin`/`end`
/// pairs are not detected; a `begin()` without a matching `end()` is simply
/// overwritten by the next `begin()`.
///
/// When the accumulated total or the sample count would overflow, the timer
/// freezes: that sample and every later one in the cycle are dropped, and
/// nothing is reported to the caller until `report()` resets the state.
#[derive(Debug)]
pub struct Timer<C: TickSource> {
    clock: C,
    calibration: ClockCalibration,
    label: String,
    state: RegionState,
}

impl<C: TickSource> Timer<C> {
    /// Calibrates against `clock` with the default configuration.
    pub fn initialize(clock: C) -> Result<Self> {
        Self::with_config(clock, TimerConfig::default())
    }

    /// Calibrates against `clock`.
    ///
    /// Fails if the clock runs slower than 1 MHz.
    pub fn with_config(clock: C, config: TimerConfig) -> Result<Self> {
        let calibration = ClockCalibration::measure(&clock)
            .with_context(|| format!("calibrating timer '{}'", config.label))?;

        log::debug!(
            "{}: calibrated at {} ticks/us",
            config.label,
            calibration.ticks_per_micro()
        );

        Ok(Self {
            clock,
            calibration,
            label: config.label,
            state: RegionState::default(),
        })
    }

    /// Re-queries the clock frequency. The accumulated cycle is kept.
    pub fn recalibrate(&mut self) -> Result<()> {
        self.calibration = ClockCalibration::measure(&self.clock)
            .with_context(|| format!("recalibrating timer '{}'", self.label))?;
        Ok(())
    }

    /// Marks the start of the region.
    #[inline]
    pub fn begin(&mut self) {
        self.state.stage(self.clock.now());
    }

    /// Marks the end of the region and folds the elapsed ticks into the cycle.
    #[inline]
    pub fn end(&mut self) {
        if self.state.is_saturated() {
            return;
        }

        if !self.state.accumulate(self.clock.now()) {
            self.saturated();
        }
    }

    /// Times one call of `f`.
    #[inline]
    pub fn measure<R>(&mut self, f: impl FnOnce() -> R) -> R {
        self.begin();
        let out = f();
        self.end();
        out
    }

    /// Ends the cycle and returns its summary without printing anything.
    ///
    /// Returns `None` when the cycle has no samples. The state is reset either way.
    pub fn summarize(&mut self) -> Option<Report> {
        let cycle = self.state.take();

        let samples = cycle.samples();
        if samples == 0 {
            return None;
        }

        let avg_ticks = cycle.total_ticks() / samples;
        let fastest_ticks = cycle.fastest_ticks().unwrap_or_default();

        Some(Report {
            label: self.label.clone(),
            avg_micros: self.calibration.to_micros(avg_ticks),
            fastest_micros: self.calibration.to_micros(fastest_ticks),
            samples,
            saturated: cycle.is_saturated(),
        })
    }

    /// Ends the cycle and writes its summary to `out`.
    ///
    /// An empty cycle writes nothing and logs a warning instead.
    pub fn report_to<W: Write>(&mut self, out: &mut W) -> io::Result<Option<Report>> {
        let report = self.summarize();

        match &report {
            Some(r) => writeln!(out, "{r}")?,
            None => log::warn!("{}: report requested with no samples recorded", self.label),
        }

        Ok(report)
    }

    /// Ends the cycle and prints its summary to stdout.
    pub fn report(&mut self) -> io::Result<Option<Report>> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.report_to(&mut lock)
    }

    pub fn state(&self) -> &RegionState {
        &self.state
    }

    pub fn calibration(&self) -> ClockCalibration {
        self.calibration
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[cold]
    #[inline(never)]
    fn saturated(&self) {
        log::warn!(
            "{}: accumulator saturated after {} samples; ignoring samples until next report",
            self.label,
            self.state.samples()
        );
    }
}
