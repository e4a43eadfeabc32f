//! Math utilities and types
//!
//! Provides the fundamental math types for the maze walk. The world is Y-up;
//! the maze floor is the (X, Z) plane.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Matrix4, Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// One of the two horizontal world axes
///
/// Collision in the maze is planar, so only X and Z ever carry meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanarAxis {
    /// World X axis
    X,
    /// World Z axis
    Z,
}

impl PlanarAxis {
    /// The other horizontal axis
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Z,
            Self::Z => Self::X,
        }
    }

    /// Index of this axis inside a [`Vec3`]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Z => 2,
        }
    }

    /// Read this axis' component from a vector
    pub fn of(self, v: &Vec3) -> f32 {
        v[self.index()]
    }

    /// Copy of `v` with this axis' component set to zero
    pub fn zeroed(self, v: &Vec3) -> Vec3 {
        let mut out = *v;
        out[self.index()] = 0.0;
        out
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::x(),
            Self::Z => Vec3::z(),
        }
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Normalize `v`, or return zero when it has no length
    pub fn normalize_or_zero(v: &Vec3) -> Vec3 {
        v.try_normalize(f32::EPSILON).unwrap_or_else(Vec3::zeros)
    }

    /// Check that every component is finite
    pub fn is_finite(v: &Vec3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create a right-handed look-at view matrix (OpenGL conventions)
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}
