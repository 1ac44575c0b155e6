//! Stepping: loaded map geometry, the fixed-tick stepper and its outputs.

pub mod clock;
pub mod event;
pub mod map;
pub mod snapshot;
pub mod step;
