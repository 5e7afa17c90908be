//! Logger setup.
//!
//! The library itself only talks to the `log` facade, and only off the hot
//! path. Binaries that want to see calibration and saturation diagnostics call
//! `init_logging` once at startup.

mod init;

pub use init::{LoggingConfig, init_logging};
