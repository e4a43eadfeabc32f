//! Level layouts as data
//!
//! Layouts are stored as RON:
//!
//! ```text
//! (
//!     name: "corridor",
//!     spawn: (0.0, 0.5, 0.0),
//!     tiles: [
//!         (position: (-0.5, 0.5, 0.0), rotation_degrees: -90.0, orientation: AlongX),
//!         (position: (0.5, 0.5, 0.0), rotation_degrees: 90.0, orientation: AlongX),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::{utils, Vec3};
use crate::physics::collision::Orientation;

use super::{LevelError, WallTile};

/// Number of tiles on each side of the built-in corridor
const CORRIDOR_TILES: usize = 5;

/// A named table of wall tiles plus the camera spawn point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Display name
    pub name: String,
    /// Camera start position
    pub spawn: Vec3,
    /// Wall tiles in declaration order
    pub tiles: Vec<WallTile>,
}

impl LevelLayout {
    /// The built-in corridor: two walls of five unit tiles at x = ±0.5,
    /// running from z = 0.5 to z = -4.5, with the camera at the open end
    pub fn corridor() -> Self {
        let left = (0..CORRIDOR_TILES).map(|i| {
            WallTile::new(Vec3::new(-0.5, 0.5, -(i as f32)), -90.0, Orientation::AlongX)
        });
        let right = (0..CORRIDOR_TILES).map(|i| {
            WallTile::new(Vec3::new(0.5, 0.5, -(i as f32)), 90.0, Orientation::AlongX)
        });

        Self {
            name: "corridor".to_string(),
            spawn: Vec3::new(0.0, 0.5, 0.0),
            tiles: left.chain(right).collect(),
        }
    }

    /// Load and validate a layout file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let layout = Self::load_from_file(path)?;
        layout.validate()?;
        log::info!(
            "Loaded level '{}' from {} ({} tiles)",
            layout.name,
            path.display(),
            layout.tiles.len()
        );
        Ok(layout)
    }

    /// Check the spawn point and every tile
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.tiles.is_empty() {
            return Err(LevelError::Empty(self.name.clone()));
        }
        if !utils::is_finite(&self.spawn) {
            return Err(LevelError::InvalidSpawn(format!("{:?}", self.spawn)));
        }
        for (index, tile) in self.tiles.iter().enumerate() {
            tile.validate()
                .map_err(|reason| LevelError::InvalidTile { index, reason })?;
        }
        Ok(())
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::corridor()
    }
}

impl Config for LevelLayout {}
