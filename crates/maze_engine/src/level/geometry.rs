//! Level geometry store
//!
//! Holds the wall segments of one level in declaration order, next to the
//! placement matrices of the tiles they came from. Nothing is sorted or
//! deduplicated: store order is what decides which wall a collision query
//! reports when several overlap.

use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::physics::collision::{query_with_radius, CollisionQuery, WallSegment, PLAYER_RADIUS};
use crate::physics::movement::{resolve_move_with_radius, ResolvedMove};

use super::{LevelError, LevelLayout, WallTile};

/// Immutable wall store for one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGeometry {
    segments: Vec<WallSegment>,
    placements: Vec<Mat4>,
}

impl LevelGeometry {
    /// Build the store from a validated layout
    pub fn from_layout(layout: &LevelLayout) -> Result<Self, LevelError> {
        layout.validate()?;
        let geometry = Self::from_tiles(&layout.tiles);
        log::info!("Level '{}' built with {} wall segments", layout.name, geometry.len());
        Ok(geometry)
    }

    /// Build the store from tiles, keeping their order
    pub fn from_tiles(tiles: &[WallTile]) -> Self {
        Self {
            segments: tiles.iter().map(WallTile::segment).collect(),
            placements: tiles.iter().map(WallTile::placement).collect(),
        }
    }

    /// Build a collision-only store from raw segments
    ///
    /// There are no tiles to place, so [`Self::placements`] is empty.
    pub fn from_segments(segments: Vec<WallSegment>) -> Self {
        Self {
            segments,
            placements: Vec::new(),
        }
    }

    /// Wall segments in declaration order
    pub fn segments(&self) -> &[WallSegment] {
        &self.segments
    }

    /// Model matrices for drawing the wall tiles, in declaration order
    pub fn placements(&self) -> &[Mat4] {
        &self.placements
    }

    /// Iterate over the wall segments
    pub fn iter(&self) -> std::slice::Iter<'_, WallSegment> {
        self.segments.iter()
    }

    /// Number of wall segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the store has no walls
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Planar (X, Z) extent of every wall corner, or `None` for an empty store
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut corners = self.segments.iter().flat_map(|s| [s.near, s.far]);
        let first = corners.next()?;
        let start = (Vec2::new(first.x, first.z), Vec2::new(first.x, first.z));

        Some(corners.fold(start, |(min, max), c| {
            let planar = Vec2::new(c.x, c.z);
            (min.inf(&planar), max.sup(&planar))
        }))
    }

    /// Test a candidate position with the standard player footprint
    pub fn query(&self, candidate: &Vec3) -> CollisionQuery {
        self.query_with_radius(candidate, PLAYER_RADIUS)
    }

    /// Test a candidate position with a footprint of half-width `radius`
    pub fn query_with_radius(&self, candidate: &Vec3, radius: f32) -> CollisionQuery {
        query_with_radius(candidate, &self.segments, radius)
    }

    /// Resolve a requested displacement against this level
    pub fn resolve_move(&self, current: &Vec3, requested: &Vec3, radius: f32) -> ResolvedMove {
        resolve_move_with_radius(current, requested, &self.segments, radius)
    }
}

impl<'a> IntoIterator for &'a LevelGeometry {
    type Item = &'a WallSegment;
    type IntoIter = std::slice::Iter<'a, WallSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision::Orientation;

    #[test]
    fn test_corridor_store_order_and_shape() {
        let geometry = LevelGeometry::from_layout(&LevelLayout::corridor()).unwrap();

        assert_eq!(geometry.len(), 10);
        assert_eq!(geometry.placements().len(), 10);
        assert!(geometry.iter().all(|s| s.orientation == Orientation::AlongX));
        assert!(geometry.iter().all(WallSegment::is_axis_aligned));

        // Left wall first, nearest tile first
        let first = geometry.segments()[0];
        assert_eq!(first.near, Vec3::new(-0.5, 1.0, -0.5));
        assert_eq!(first.far, Vec3::new(-0.5, 1.0, 0.5));
        assert_eq!(geometry.segments()[5].near.x, 0.5);
    }

    #[test]
    fn test_building_twice_is_identical() {
        let layout = LevelLayout::corridor();
        let a = LevelGeometry::from_layout(&layout).unwrap();
        let b = LevelGeometry::from_layout(&layout).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.segments(), b.segments());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let tile = WallTile::new(Vec3::new(0.5, 0.5, 0.0), 90.0, Orientation::AlongX);
        let geometry = LevelGeometry::from_tiles(&[tile, tile]);

        assert_eq!(geometry.len(), 2);
        assert_eq!(geometry.segments()[0], geometry.segments()[1]);
    }

    #[test]
    fn test_bounds() {
        let geometry = LevelGeometry::from_layout(&LevelLayout::corridor()).unwrap();
        let (min, max) = geometry.bounds().unwrap();

        assert_eq!(min, Vec2::new(-0.5, -4.5));
        assert_eq!(max, Vec2::new(0.5, 0.5));
        assert!(LevelGeometry::from_segments(Vec::new()).bounds().is_none());
    }

    #[test]
    fn test_corridor_walls_block_sideways() {
        let geometry = LevelGeometry::from_layout(&LevelLayout::corridor()).unwrap();

        assert!(!geometry.query(&Vec3::new(0.0, 0.5, -2.0)).is_hit());
        assert!(geometry.query(&Vec3::new(-0.3, 0.5, -2.0)).is_hit());
        assert!(geometry.query(&Vec3::new(0.3, 0.5, -2.0)).is_hit());

        let resolved = geometry.resolve_move(
            &Vec3::new(0.0, 0.5, -2.0),
            &Vec3::new(-0.3, 0.0, 0.0),
            PLAYER_RADIUS,
        );
        assert_eq!(resolved.displacement, Vec3::zeros());
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let mut layout = LevelLayout::corridor();
        layout.tiles[0].rotation_degrees = f32::NAN;
        assert!(LevelGeometry::from_layout(&layout).is_err());
    }
}
