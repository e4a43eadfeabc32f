//! Audio cue scheduling
//!
//! The engine decides *when* a sound should start; playing it is left to the
//! host's audio backend.

pub mod footstep;

pub use footstep::FootstepCue;
