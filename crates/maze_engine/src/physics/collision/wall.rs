//! Wall segments and the planar footprint test
//!
//! A wall is stored as the two ends of its top edge. The overlap test only
//! looks at the near corner, the segment length and the orientation tag; the
//! far corner only contributes the length.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{PlanarAxis, Vec3};

/// Half-width of the player's square collision footprint, in world units
pub const PLAYER_RADIUS: f32 = 0.25;

/// Which way a wall is tagged for collision
///
/// The tag names the axis the wall blocks. An `AlongX` wall sits at a fixed X
/// and runs along Z, so it stops X-ward motion and lets the player slide
/// along Z; `AlongZ` is the mirror image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Fixed X, extends along Z, blocks X
    AlongX,
    /// Fixed Z, extends along X, blocks Z
    AlongZ,
}

impl Orientation {
    /// Axis the wall has no extent on; the footprint must straddle it exactly
    pub const fn thickness_axis(self) -> PlanarAxis {
        match self {
            Self::AlongX => PlanarAxis::X,
            Self::AlongZ => PlanarAxis::Z,
        }
    }

    /// Axis the wall extends along by its length
    pub const fn length_axis(self) -> PlanarAxis {
        self.thickness_axis().other()
    }

    /// Axis whose motion a hit on this wall cancels
    pub const fn blocked_axis(self) -> PlanarAxis {
        self.thickness_axis()
    }
}

/// One maze wall's collision boundary (a "hitbox")
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// Start of the wall's top edge
    pub near: Vec3,
    /// End of the wall's top edge
    pub far: Vec3,
    /// Collision tag
    pub orientation: Orientation,
}

impl WallSegment {
    /// Create a wall segment from its top-edge corners
    pub const fn new(near: Vec3, far: Vec3, orientation: Orientation) -> Self {
        Self { near, far, orientation }
    }

    /// Distance between the two corners
    pub fn length(&self) -> f32 {
        (self.far - self.near).norm()
    }

    /// Whether the corners line up on the thickness axis
    pub fn is_axis_aligned(&self) -> bool {
        let axis = self.orientation.thickness_axis();
        (axis.of(&self.near) - axis.of(&self.far)).abs() <= f32::EPSILON
    }

    /// Test a square footprint of half-width `radius` centred on `candidate`
    ///
    /// Only the horizontal axes take part. On the thickness axis the footprint
    /// band `[c - r, c - r + 2r]` must contain the wall's coordinate. On the
    /// length axis the band must overlap `[near, near + length]`.
    pub fn overlaps(&self, candidate: &Vec3, radius: f32) -> bool {
        let thickness = self.orientation.thickness_axis();
        let along = self.orientation.length_axis();

        let wall_at = thickness.of(&self.near);
        let wall_from = along.of(&self.near);
        let wall_to = wall_from + self.length();

        let (low, high) = footprint(thickness.of(candidate), radius);
        let across_hit = high >= wall_at && wall_at >= low;

        let (low, high) = footprint(along.of(candidate), radius);
        let along_hit = high >= wall_from && wall_to >= low;

        across_hit && along_hit
    }
}

/// Footprint band on one axis, computed as `(c - r, c - r + 2r)`
fn footprint(center: f32, radius: f32) -> (f32, f32) {
    let low = center - radius;
    (low, low + 2.0 * radius)
}
