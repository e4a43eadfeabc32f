//! Level data: wall tiles, layouts and the geometry store
//!
//! A level is a single table of wall tiles. The same table yields the model
//! matrices a renderer places its wall quads with and the wall segments the
//! collision query tests against, so the two can never drift apart.

pub mod tile;
pub mod layout;
pub mod geometry;

pub use tile::{WallTile, TILE_HALF_HEIGHT};
pub use layout::LevelLayout;
pub use geometry::LevelGeometry;

use crate::config::ConfigError;

/// Level loading errors
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// The level file could not be read or parsed
    #[error("Level file error: {0}")]
    Config(#[from] ConfigError),

    /// The level has no wall tiles
    #[error("Level '{0}' has no wall tiles")]
    Empty(String),

    /// The spawn point is not a finite position
    #[error("Spawn point {0} is not finite")]
    InvalidSpawn(String),

    /// A wall tile has unusable values
    #[error("Wall tile #{index} is invalid: {reason}")]
    InvalidTile {
        /// Position of the tile in the layout
        index: usize,
        /// What is wrong with it
        reason: String,
    },
}
