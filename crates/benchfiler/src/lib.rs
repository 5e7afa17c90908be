//! Benchfiler: benchmark-grade timing of one hot code region in a live process.
//!
//! Profilers are good at finding slow code but pay for it with threading,
//! allocation and zone bookkeeping. This crate trades all of that for a
//! single fixed-size accumulator, so an A/B change to one region can be
//! measured in place, frame after frame.

pub mod clock;
pub mod logging;
pub mod timer;
