//! # Unified Configuration System
//!
//! All configuration sections live here so they can be found in one place and
//! loaded from a single TOML or RON file through [`Config`].
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: logging and debug behaviour
//! - **Movement Config**: walking speed, mouse look speed, player footprint
//! - **Audio Config**: footstep cue timing
//! - **Level Config**: where the wall layout comes from

use std::path::{Path, PathBuf};

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};
use crate::physics::collision::PLAYER_RADIUS;

/// # Engine Configuration
///
/// Core engine behaviour: logging and frame stepping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log level, overridden by `RUST_LOG`
    pub log_level: String,
    /// Whether to enable debug features
    pub debug_mode: bool,
    /// Longest frame delta the simulation will take in one step, in seconds
    pub max_frame_seconds: f32,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            debug_mode: cfg!(debug_assertions),
            max_frame_seconds: 0.1,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Movement Configuration
///
/// Speeds used to turn key and mouse state into a per-frame displacement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walking speed in world units per second
    pub move_speed: f32,
    /// Look speed in radians per second per pixel of mouse travel
    pub mouse_speed: f32,
    /// Half-width of the player's square collision footprint
    pub player_radius: f32,
}

impl MovementConfig {
    /// Set walking speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Validate the movement settings
    pub fn validate(&self) -> Result<(), String> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(format!("Move speed must be a non-negative number, got {}", self.move_speed));
        }
        if !self.mouse_speed.is_finite() {
            return Err("Mouse speed must be finite".to_string());
        }
        if !self.player_radius.is_finite() || self.player_radius <= 0.0 {
            return Err(format!("Player radius must be positive, got {}", self.player_radius));
        }
        Ok(())
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.5,
            mouse_speed: 0.5,
            player_radius: PLAYER_RADIUS,
        }
    }
}

/// # Audio Configuration
///
/// Timing for the footstep cue. Playback itself belongs to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Length of one footstep cue in seconds
    pub footstep_seconds: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { footstep_seconds: 0.45 }
    }
}

/// # Level Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    /// RON level layout to load; the built-in corridor is used when unset
    pub path: Option<String>,
}

impl LevelConfig {
    /// Level file location, with a relative path taken from `config_dir`
    pub fn resolve_path(&self, config_dir: &Path) -> Option<PathBuf> {
        self.path.as_ref().map(|path| config_dir.join(path))
    }
}

/// # Complete Maze Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
/// This is the main configuration structure applications should use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Movement configuration
    pub movement: MovementConfig,
    /// Footstep timing
    pub audio: AudioConfig,
    /// Level source
    pub level: LevelConfig,
}

impl MazeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate().map_err(ConfigError::Invalid)?;

        if !(self.engine.max_frame_seconds.is_finite() && self.engine.max_frame_seconds > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Max frame seconds must be positive, got {}",
                self.engine.max_frame_seconds
            )));
        }
        if !(self.audio.footstep_seconds.is_finite() && self.audio.footstep_seconds >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Footstep length must be non-negative, got {}",
                self.audio.footstep_seconds
            )));
        }
        Ok(())
    }
}

impl Config for MazeConfig {}
