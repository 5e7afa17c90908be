//! Single-region timer.
//!
//! Intended usage:
//! - one `Timer` per measured region, owned by whatever code is being measured
//! - `begin()` / `end()` around the hot section, as often as it runs
//! - `report()` once per reporting interval to print a summary and reset
//!
//! Not thread-safe and not reentrant: one region, one thread, no nesting.

mod calibration;
mod config;
mod report;
mod state;
mod timer;

pub use calibration::ClockCalibration;
pub use config::TimerConfig;
pub use report::Report;
pub use state::RegionState;
pub use timer::Timer;
