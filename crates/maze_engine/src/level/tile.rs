//! Wall tiles
//!
//! A wall tile is a unit floor quad (spanning local X and Z) stood up on its
//! edge. Tiles tagged [`Orientation::AlongX`] turn about +Z so the quad spans
//! world Y and Z; [`Orientation::AlongZ`] tiles turn about +X so it spans Y and
//! X. A tile longer than one unit is stretched along its length axis.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::physics::collision::{Orientation, WallSegment};

/// Half the height of a wall tile; the hitbox sits on the tile's top edge
pub const TILE_HALF_HEIGHT: f32 = 0.5;

/// One placed wall tile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallTile {
    /// Centre of the tile in world space
    pub position: Vec3,
    /// Turn that stands the floor quad up, in degrees (usually ±90)
    pub rotation_degrees: f32,
    /// Length along the wall, in world units
    #[serde(default = "unit_length")]
    pub length: f32,
    /// Collision tag
    pub orientation: Orientation,
}

const fn unit_length() -> f32 {
    1.0
}

impl WallTile {
    /// Create a unit-length tile
    pub fn new(position: Vec3, rotation_degrees: f32, orientation: Orientation) -> Self {
        Self {
            position,
            rotation_degrees,
            length: unit_length(),
            orientation,
        }
    }

    /// Set the tile length
    pub fn with_length(mut self, length: f32) -> Self {
        self.length = length;
        self
    }

    /// Model matrix for drawing the tile: translate, then turn, then stretch
    pub fn placement(&self) -> Mat4 {
        let angle = utils::deg_to_rad(self.rotation_degrees);
        let (turn, stretch) = match self.orientation {
            Orientation::AlongX => (Mat4::rotation_z(angle), Vec3::new(1.0, 1.0, self.length)),
            Orientation::AlongZ => (Mat4::rotation_x(angle), Vec3::new(self.length, 1.0, 1.0)),
        };

        Mat4::new_translation(&self.position) * turn * Mat4::new_nonuniform_scaling(&stretch)
    }

    /// Collision segment along the tile's top edge
    pub fn segment(&self) -> WallSegment {
        let half = self.orientation.length_axis().unit() * (self.length * 0.5);
        let top = self.position + Vec3::y() * TILE_HALF_HEIGHT;

        WallSegment::new(top - half, top + half, self.orientation)
    }

    /// Check that the tile can be placed and collided with
    pub fn validate(&self) -> Result<(), String> {
        if !utils::is_finite(&self.position) {
            return Err(format!("position {:?} is not finite", self.position));
        }
        if !self.rotation_degrees.is_finite() {
            return Err("rotation is not finite".to_string());
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(format!("length must be positive, got {}", self.length));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_spans_tile_top_edge() {
        let tile = WallTile::new(Vec3::new(-0.5, 0.5, -2.0), -90.0, Orientation::AlongX);
        let segment = tile.segment();

        assert_relative_eq!(segment.near, Vec3::new(-0.5, 1.0, -2.5));
        assert_relative_eq!(segment.far, Vec3::new(-0.5, 1.0, -1.5));
        assert_relative_eq!(segment.length(), 1.0);
        assert!(segment.is_axis_aligned());
    }

    #[test]
    fn test_long_along_z_segment() {
        let tile = WallTile::new(Vec3::new(1.0, 0.5, -4.5), 90.0, Orientation::AlongZ).with_length(3.0);
        let segment = tile.segment();

        assert_relative_eq!(segment.near, Vec3::new(-0.5, 1.0, -4.5));
        assert_relative_eq!(segment.far, Vec3::new(2.5, 1.0, -4.5));
        assert_relative_eq!(segment.length(), 3.0);
    }

    #[test]
    fn test_placement_stands_quad_on_wall_line() {
        let tile = WallTile::new(Vec3::new(-0.5, 0.5, -2.0), -90.0, Orientation::AlongX);
        let model = tile.placement();

        // Quad corners in local floor space land on the x = -0.5 plane, y in [0, 1]
        for corner in [
            Point3::new(-0.5, 0.0, -0.5),
            Point3::new(0.5, 0.0, -0.5),
            Point3::new(0.5, 0.0, 0.5),
            Point3::new(-0.5, 0.0, 0.5),
        ] {
            let world = model.transform_point(&corner);
            assert_relative_eq!(world.x, -0.5, epsilon = 1e-6);
            assert!(world.y > -1e-6 && world.y < 1.0 + 1e-6);
            assert!(world.z >= -2.5 - 1e-6 && world.z <= -1.5 + 1e-6);
        }
    }

    #[test]
    fn test_placement_stretches_along_length() {
        let tile = WallTile::new(Vec3::new(0.0, 0.5, -4.5), 90.0, Orientation::AlongZ).with_length(2.0);
        let world = tile.placement().transform_point(&Point3::new(0.5, 0.0, 0.0));

        assert_relative_eq!(world, Point3::new(1.0, 0.5, -4.5), epsilon = 1e-6);
    }

    #[test]
    fn test_validate_rejects_bad_tiles() {
        let good = WallTile::new(Vec3::new(0.5, 0.5, 0.0), 90.0, Orientation::AlongX);
        assert!(good.validate().is_ok());
        assert!(good.with_length(0.0).validate().is_err());
        assert!(good.with_length(f32::INFINITY).validate().is_err());

        let mut bad = good;
        bad.position.z = f32::NAN;
        assert!(bad.validate().is_err());
    }
}
