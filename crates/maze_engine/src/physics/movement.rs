//! Movement resolution: full move or axis slide
//!
//! One collision query per frame decides the outcome. A blocked move drops the
//! wall's blocked axis, then the remaining direction is normalized and scaled
//! back to the requested step length, so sliding along a wall happens at full
//! walking speed. The slid position is not queried again; it may still touch a
//! second wall and is accepted as-is for that frame.

use crate::foundation::math::{utils, Vec3};

use super::collision::{query_with_radius, CollisionQuery, Orientation, WallSegment, PLAYER_RADIUS};

/// Outcome of resolving one frame's requested displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedMove {
    /// Displacement the caller should apply
    pub displacement: Vec3,
    /// Collision found at the unmodified candidate position
    pub collision: CollisionQuery,
}

impl ResolvedMove {
    /// Whether applying this move changes the position
    pub fn moved(&self) -> bool {
        self.displacement != Vec3::zeros()
    }

    /// Whether a wall changed the requested displacement
    pub const fn is_blocked(&self) -> bool {
        self.collision.is_hit()
    }
}

/// Resolve `requested` from `current` with the standard player footprint
pub fn resolve_move(current: &Vec3, requested: &Vec3, segments: &[WallSegment]) -> ResolvedMove {
    resolve_move_with_radius(current, requested, segments, PLAYER_RADIUS)
}

/// Resolve `requested` from `current` with a footprint of half-width `radius`
pub fn resolve_move_with_radius(
    current: &Vec3,
    requested: &Vec3,
    segments: &[WallSegment],
    radius: f32,
) -> ResolvedMove {
    let candidate = current + requested;
    let collision = query_with_radius(&candidate, segments, radius);

    let displacement = match collision {
        CollisionQuery::Clear => *requested,
        CollisionQuery::Hit { index, wall } => {
            let slid = slide(requested, wall.orientation);
            log::debug!(
                "Wall #{} ({:?}) blocked move ({:.4}, {:.4}) -> ({:.4}, {:.4})",
                index,
                wall.orientation,
                requested.x,
                requested.z,
                slid.x,
                slid.z
            );
            slid
        }
    };

    ResolvedMove { displacement, collision }
}

/// Drop the blocked axis and rescale what is left to the requested step length
///
/// The reduced direction is normalized before scaling, never the full one. A
/// request that only had motion on the blocked axis becomes zero.
pub fn slide(requested: &Vec3, orientation: Orientation) -> Vec3 {
    let reduced = orientation.blocked_axis().zeroed(requested);
    utils::normalize_or_zero(&reduced) * requested.norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn left_wall() -> WallSegment {
        WallSegment::new(Vec3::new(-0.5, 1.0, -3.5), Vec3::new(-0.5, 1.0, 0.5), Orientation::AlongX)
    }

    #[test]
    fn test_clear_move_is_unchanged() {
        let requested = Vec3::new(0.01, 0.0, -0.02);
        let resolved = resolve_move(&Vec3::new(0.0, 0.5, -2.0), &requested, &[left_wall()]);

        assert_eq!(resolved.displacement, requested);
        assert!(!resolved.is_blocked());
        assert!(resolved.moved());
    }

    #[test]
    fn test_zero_request_stays_zero() {
        let walls = [left_wall()];

        // Even when standing on the wall, no request means no motion
        for position in [Vec3::new(0.0, 0.5, -2.0), Vec3::new(-0.5, 0.5, -2.0)] {
            let resolved = resolve_move(&position, &Vec3::zeros(), &walls);
            assert_eq!(resolved.displacement, Vec3::zeros());
            assert!(!resolved.moved());
        }
    }

    #[test]
    fn test_walking_into_wall_is_fully_blocked() {
        let resolved = resolve_move(
            &Vec3::new(0.0, 0.5, -2.0),
            &Vec3::new(-0.3, 0.0, 0.0),
            &[left_wall()],
        );

        assert!(resolved.is_blocked());
        assert_eq!(resolved.collision.index(), Some(0));
        assert_eq!(resolved.displacement, Vec3::zeros());
        assert!(!resolved.moved());
    }

    #[test]
    fn test_parallel_move_near_wall_is_unchanged() {
        // Hugging the wall from inside the corridor without touching the band
        let start = Vec3::new(-0.5 + 0.3, 0.5, -2.0);
        let requested = Vec3::new(0.0, 0.0, 0.3);
        let resolved = resolve_move(&start, &requested, &[left_wall()]);

        assert!(!resolved.is_blocked());
        assert_eq!(resolved.displacement, requested);
    }

    #[test]
    fn test_diagonal_slide_keeps_free_axis_at_full_length() {
        let requested = Vec3::new(-0.3, 0.0, -0.4);
        let resolved = resolve_move(&Vec3::new(0.0, 0.5, -2.0), &requested, &[left_wall()]);

        assert!(resolved.is_blocked());
        assert_relative_eq!(resolved.displacement, Vec3::new(0.0, 0.0, -0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_slide_never_reverses_free_axis() {
        for z in [-0.4_f32, -0.01, 0.01, 0.4] {
            let slid = slide(&Vec3::new(-0.3, 0.0, z), Orientation::AlongX);
            assert_eq!(slid.x, 0.0);
            assert_eq!(slid.z.signum(), z.signum());

            let slid = slide(&Vec3::new(z, 0.0, 0.3), Orientation::AlongZ);
            assert_eq!(slid.z, 0.0);
            assert_eq!(slid.x.signum(), z.signum());
        }
    }

    #[test]
    fn test_slid_position_is_not_requeried() {
        // Second wall sits exactly where the slide lands; the slide is still approved
        let back = WallSegment::new(Vec3::new(-1.0, 1.0, -2.5), Vec3::new(1.0, 1.0, -2.5), Orientation::AlongZ);
        let walls = [left_wall(), back];

        let resolved = resolve_move(&Vec3::new(0.0, 0.5, -2.0), &Vec3::new(-0.3, 0.0, -0.4), &walls);
        assert_eq!(resolved.collision.index(), Some(0));
        assert_relative_eq!(resolved.displacement, Vec3::new(0.0, 0.0, -0.5), epsilon = 1e-6);
    }
}
