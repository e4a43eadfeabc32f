//! # Core Engine Module
//!
//! Shared abstractions used by every other subsystem.
//!
//! ## Organization
//!
//! - **Config**: Typed configuration sections for engine, movement, audio and level

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    AudioConfig,
    EngineConfig,
    LevelConfig,
    MazeConfig,
    MovementConfig,
};
