//! Input state handed to the simulation each frame
//!
//! Devices are read by the host. The simulation only sees which movement keys
//! are held and how far the mouse travelled since the last frame.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;

bitflags! {
    /// Movement keys held during a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct MoveKeys: u8 {
        /// Walk toward the look direction (W)
        const FORWARD = 1 << 0;
        /// Walk away from the look direction (S)
        const BACKWARD = 1 << 1;
        /// Strafe left (A)
        const LEFT = 1 << 2;
        /// Strafe right (D)
        const RIGHT = 1 << 3;
    }
}

impl MoveKeys {
    /// Build from the four directional key states
    pub fn from_states(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        let mut keys = Self::empty();
        keys.set(Self::FORWARD, forward);
        keys.set(Self::BACKWARD, backward);
        keys.set(Self::LEFT, left);
        keys.set(Self::RIGHT, right);
        keys
    }
}

/// Everything the simulation reads for one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Movement keys held this frame
    pub keys: MoveKeys,
    /// Mouse travel as (centre - cursor) in pixels, horizontal then vertical
    pub mouse_delta: Vec2,
    /// Seconds since the previous frame
    pub delta_time: f32,
}

impl FrameInput {
    /// Keys held with no mouse travel
    pub fn held(keys: MoveKeys, delta_time: f32) -> Self {
        Self {
            keys,
            mouse_delta: Vec2::zeros(),
            delta_time,
        }
    }

    /// Add mouse travel
    pub fn with_mouse(mut self, dx: f32, dy: f32) -> Self {
        self.mouse_delta = Vec2::new(dx, dy);
        self
    }
}
