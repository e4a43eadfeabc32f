//! Wall collision for the maze
//!
//! # Module Organization
//!
//! - [`wall`] - Wall segments (hitboxes) and their orientation lookup
//! - [`resolver`] - First-match collision query over an ordered wall list
//!
//! # Key Types
//!
//! - [`WallSegment`] - Top edge of one wall plus the axis it blocks
//! - [`Orientation`] - Maps a wall to its (thickness, length) axes
//! - [`CollisionQuery`] - Result of testing one candidate position

pub mod wall;
pub mod resolver;

// Re-export commonly used types
pub use wall::{Orientation, WallSegment, PLAYER_RADIUS};
pub use resolver::{query, query_with_radius, CollisionQuery};
