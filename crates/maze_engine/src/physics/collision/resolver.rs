//! Collision query over an ordered wall list
//!
//! The query walks the walls in store order and stops at the first one whose
//! footprint test passes. It does not look for the closest wall: level data
//! with overlapping ends resolves to whichever wall was declared first.

use crate::foundation::math::Vec3;

use super::wall::{WallSegment, PLAYER_RADIUS};

/// Result of testing one candidate position against the walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionQuery {
    /// No wall overlaps the candidate footprint
    Clear,
    /// The first wall (in store order) that overlaps the candidate footprint
    Hit {
        /// Position of the wall in the store
        index: usize,
        /// The wall that was hit
        wall: WallSegment,
    },
}

impl CollisionQuery {
    /// Whether any wall was hit
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// The wall that was hit, if any
    pub const fn wall(&self) -> Option<&WallSegment> {
        match self {
            Self::Hit { wall, .. } => Some(wall),
            Self::Clear => None,
        }
    }

    /// Store index of the wall that was hit, if any
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Hit { index, .. } => Some(*index),
            Self::Clear => None,
        }
    }
}

/// Test `candidate` against `segments` with the standard player footprint
pub fn query(candidate: &Vec3, segments: &[WallSegment]) -> CollisionQuery {
    query_with_radius(candidate, segments, PLAYER_RADIUS)
}

/// Test `candidate` against `segments` with a footprint of half-width `radius`
pub fn query_with_radius(candidate: &Vec3, segments: &[WallSegment], radius: f32) -> CollisionQuery {
    segments
        .iter()
        .enumerate()
        .find(|(_, wall)| wall.overlaps(candidate, radius))
        .map_or(CollisionQuery::Clear, |(index, wall)| {
            log::trace!(
                "Candidate ({:.3}, {:.3}) hit wall #{} ({:?})",
                candidate.x,
                candidate.z,
                index,
                wall.orientation
            );
            CollisionQuery::Hit { index, wall: *wall }
        })
}
