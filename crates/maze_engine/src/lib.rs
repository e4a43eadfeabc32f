//! # Maze Engine
//!
//! The simulation core of a first-person maze walk: wall geometry, the
//! per-frame collision query and the axis-slide movement policy, plus the
//! camera, input and footstep bookkeeping that feed them.
//!
//! ## Features
//!
//! - **Wall Geometry**: one table of wall tiles drives both placement transforms and hitboxes
//! - **Collision Queries**: planar first-match tests against ordered wall segments
//! - **Axis Sliding**: blocked moves keep their free-axis component
//! - **Deterministic Replay**: scripted input runs frame for frame without a window
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maze_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MazeConfig::default();
//!     let level = LevelLayout::corridor();
//!     let mut walker = Walker::new(&level, &config)?;
//!
//!     let report = walker.step(&FrameInput::held(MoveKeys::FORWARD, 1.0 / 60.0));
//!     println!("camera at {:?}", report.position);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod physics;
pub mod level;
pub mod input;
pub mod camera;
pub mod audio;
pub mod simulation;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        audio::FootstepCue,
        camera::FirstPersonCamera,
        config::{Config, ConfigError},
        core::config::{AudioConfig, EngineConfig, LevelConfig, MazeConfig, MovementConfig},
        foundation::math::{Mat4, Point3, Vec3},
        input::{FrameInput, MoveKeys},
        level::{LevelError, LevelGeometry, LevelLayout, WallTile},
        physics::{
            collision::{query, CollisionQuery, Orientation, WallSegment, PLAYER_RADIUS},
            movement::{resolve_move, ResolvedMove},
        },
        simulation::{FrameReport, ReplayScript, Walker},
    };
}
