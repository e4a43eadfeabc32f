//! # First-Person Camera
//!
//! Mouse-look camera for walking the maze. Orientation is two angles: a yaw
//! (`angle_x`, around world Y) and a pitch (`angle_y`). Walking ignores pitch;
//! forward motion is the look direction flattened onto the floor.
//!
//! ## Coordinate System
//! Right-handed, Y-up. With `angle_x = PI` and `angle_y = 0` the camera looks
//! down -Z, into the corridor.

use crate::foundation::math::{constants, utils, Mat4, Mat4Ext, Vec2, Vec3};
use crate::input::MoveKeys;

/// First-person camera pose
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    /// Camera position in world space
    pub position: Vec3,
    /// Yaw in radians
    pub angle_x: f32,
    /// Pitch in radians
    pub angle_y: f32,
    /// Look speed in radians per second per pixel of mouse travel
    pub mouse_speed: f32,
}

impl FirstPersonCamera {
    /// Camera at `position` looking down -Z
    pub fn new(position: Vec3, mouse_speed: f32) -> Self {
        Self {
            position,
            angle_x: constants::PI,
            angle_y: 0.0,
            mouse_speed,
        }
    }

    /// Turn by a mouse delta measured as (centre - cursor)
    pub fn look(&mut self, mouse_delta: &Vec2, delta_time: f32) {
        self.angle_x += self.mouse_speed * delta_time * mouse_delta.x;
        self.angle_y += self.mouse_speed * delta_time * mouse_delta.y;
    }

    /// Unit look direction
    pub fn target(&self) -> Vec3 {
        let (sin_x, cos_x) = self.angle_x.sin_cos();
        let (sin_y, cos_y) = self.angle_y.sin_cos();
        Vec3::new(cos_y * sin_x, sin_y, cos_y * cos_x)
    }

    /// Unit strafe direction, always horizontal
    pub fn right(&self) -> Vec3 {
        let (sin, cos) = (self.angle_x - constants::HALF_PI).sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    /// Camera up vector, perpendicular to the look and strafe directions
    pub fn up(&self) -> Vec3 {
        self.right().cross(&self.target())
    }

    /// Look direction flattened onto the floor; zero when looking straight up or down
    pub fn walk_forward(&self) -> Vec3 {
        let target = self.target();
        utils::normalize_or_zero(&Vec3::new(target.x, 0.0, target.z))
    }

    /// Displacement the held keys ask for this frame
    ///
    /// Each held key adds its own `speed * dt` step, so opposite keys cancel and
    /// a diagonal is longer than a straight step.
    pub fn walk_displacement(&self, keys: MoveKeys, speed: f32, delta_time: f32) -> Vec3 {
        let step = speed * delta_time;
        let forward = self.walk_forward();
        let right = self.right();

        let mut displacement = Vec3::zeros();
        if keys.contains(MoveKeys::FORWARD) {
            displacement += forward * step;
        }
        if keys.contains(MoveKeys::BACKWARD) {
            displacement -= forward * step;
        }
        if keys.contains(MoveKeys::LEFT) {
            displacement -= right * step;
        }
        if keys.contains(MoveKeys::RIGHT) {
            displacement += right * step;
        }
        displacement
    }

    /// Move the camera
    pub fn translate(&mut self, displacement: &Vec3) {
        self.position += displacement;
        log::trace!("Camera position updated to: {:?}", self.position);
    }

    /// View matrix for the rendering collaborator
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.target(), self.up())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spawn_camera() -> FirstPersonCamera {
        FirstPersonCamera::new(Vec3::new(0.0, 0.5, 0.0), 0.5)
    }

    #[test]
    fn test_starts_looking_down_negative_z() {
        let camera = spawn_camera();

        assert_relative_eq!(camera.target(), Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);
        assert_relative_eq!(camera.right(), Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(camera.up(), Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn test_look_scales_by_speed_and_delta() {
        let mut camera = spawn_camera();
        camera.look(&Vec2::new(10.0, -4.0), 0.1);

        assert_relative_eq!(camera.angle_x, constants::PI + 0.5, epsilon = 1e-6);
        assert_relative_eq!(camera.angle_y, -0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_walk_ignores_pitch() {
        let mut camera = spawn_camera();
        camera.angle_y = 1.0;

        let displacement = camera.walk_displacement(MoveKeys::FORWARD, 0.5, 0.2);
        assert_relative_eq!(displacement, Vec3::new(0.0, 0.0, -0.1), epsilon = 1e-6);
    }

    #[test]
    fn test_keys_combine_and_cancel() {
        let camera = spawn_camera();

        let none = camera.walk_displacement(MoveKeys::empty(), 0.5, 0.2);
        assert_eq!(none, Vec3::zeros());

        let cancel = camera.walk_displacement(MoveKeys::FORWARD | MoveKeys::BACKWARD, 0.5, 0.2);
        assert_relative_eq!(cancel, Vec3::zeros(), epsilon = 1e-6);

        let strafe = camera.walk_displacement(MoveKeys::LEFT, 0.5, 0.2);
        assert_relative_eq!(strafe, Vec3::new(-0.1, 0.0, 0.0), epsilon = 1e-6);

        let diagonal = camera.walk_displacement(MoveKeys::FORWARD | MoveKeys::RIGHT, 1.0, 1.0);
        assert_relative_eq!(diagonal, Vec3::new(1.0, 0.0, -1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_straight_down_has_no_walk_direction() {
        let mut camera = spawn_camera();
        camera.angle_y = -constants::HALF_PI;

        assert_eq!(camera.walk_forward(), Vec3::zeros());
        assert_eq!(camera.walk_displacement(MoveKeys::FORWARD, 0.5, 0.2), Vec3::zeros());
    }

    #[test]
    fn test_view_matrix_moves_position_to_origin() {
        let camera = spawn_camera();
        let eye = camera.view_matrix().transform_point(&camera.position.into());

        assert_relative_eq!(eye.coords, Vec3::zeros(), epsilon = 1e-6);
    }
}
