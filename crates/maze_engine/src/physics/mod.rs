//! Physics module for wall collision and movement response
//!
//! Collision in the maze is planar and axis-aligned: the player's square
//! footprint is tested against ordered wall segments, and a blocked move slides
//! along the wall's free axis.

pub mod collision;
pub mod movement;

pub use collision::{
    query,
    CollisionQuery,
    Orientation,
    WallSegment,
    PLAYER_RADIUS,
};
pub use movement::{resolve_move, ResolvedMove};
