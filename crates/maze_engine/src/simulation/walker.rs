//! First-person walker

use crate::audio::FootstepCue;
use crate::camera::FirstPersonCamera;
use crate::core::config::{MazeConfig, MovementConfig};
use crate::foundation::math::Vec3;
use crate::foundation::time::FrameClock;
use crate::input::FrameInput;
use crate::level::{LevelError, LevelGeometry, LevelLayout};

/// What happened during one simulated frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Camera position after the frame
    pub position: Vec3,
    /// Displacement that was applied
    pub displacement: Vec3,
    /// Store index of the wall that changed the requested move, if any
    pub blocked_by: Option<usize>,
    /// Whether the camera moved
    pub moved: bool,
    /// Whether a footstep cue started this frame
    pub footstep: bool,
}

/// Walks a camera through one level
#[derive(Debug, Clone)]
pub struct Walker {
    camera: FirstPersonCamera,
    geometry: LevelGeometry,
    movement: MovementConfig,
    footsteps: FootstepCue,
    clock: FrameClock,
    verbose: bool,
}

impl Walker {
    /// Place a camera at the layout's spawn point
    pub fn new(layout: &LevelLayout, config: &MazeConfig) -> Result<Self, LevelError> {
        config.validate()?;
        let geometry = LevelGeometry::from_layout(layout)?;

        Ok(Self {
            camera: FirstPersonCamera::new(layout.spawn, config.movement.mouse_speed),
            geometry,
            movement: config.movement.clone(),
            footsteps: FootstepCue::new(config.audio.footstep_seconds),
            clock: FrameClock::new(config.engine.max_frame_seconds),
            verbose: config.engine.debug_mode,
        })
    }

    /// Advance one frame
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        let dt = self.clock.tick(input.delta_time);

        self.camera.look(&input.mouse_delta, dt);
        let requested = self
            .camera
            .walk_displacement(input.keys, self.movement.move_speed, dt);
        let resolved = self.geometry.resolve_move(
            &self.camera.position,
            &requested,
            self.movement.player_radius,
        );
        self.camera.translate(&resolved.displacement);

        let moved = resolved.moved();
        let report = FrameReport {
            frame: self.clock.frame_count(),
            position: self.camera.position,
            displacement: resolved.displacement,
            blocked_by: resolved.collision.index(),
            moved,
            footstep: self.footsteps.update(moved, dt),
        };

        if self.verbose {
            log::debug!("{:?}", report);
        } else {
            log::trace!("{:?}", report);
        }
        report
    }

    /// Current camera
    pub fn camera(&self) -> &FirstPersonCamera {
        &self.camera
    }

    /// Level the walker moves through
    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    /// Frame clock
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Footsteps started so far
    pub fn footsteps(&self) -> u64 {
        self.footsteps.started()
    }
}
