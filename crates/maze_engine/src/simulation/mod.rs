//! # Simulation
//!
//! Per-frame walking: look, build the requested step, resolve it against the
//! level and schedule footsteps. [`ReplayScript`] drives a [`Walker`] from a
//! fixed list of inputs so a walk can be reproduced exactly.

pub mod walker;
pub mod replay;

pub use walker::{FrameReport, Walker};
pub use replay::{ReplayScript, ReplaySegment};
