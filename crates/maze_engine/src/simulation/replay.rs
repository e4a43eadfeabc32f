//! Scripted input replay
//!
//! A replay is a list of segments, each holding a key set and mouse travel for
//! a number of frames, stepped at a fixed delta. The same script always
//! produces the same inputs.
//!
//! ```text
//! (
//!     fixed_dt: 0.016666668,
//!     segments: [
//!         (keys: "FORWARD", frames: 120),
//!         (keys: "LEFT", mouse: (0.0, 0.0), frames: 45),
//!     ],
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::{constants, Vec2};
use crate::input::{FrameInput, MoveKeys};

use super::{FrameReport, Walker};

fn no_mouse() -> Vec2 {
    Vec2::zeros()
}

/// Inputs held for a run of frames
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaySegment {
    /// Keys held during the segment
    #[serde(default)]
    pub keys: MoveKeys,
    /// Mouse travel on every frame of the segment
    #[serde(default = "no_mouse")]
    pub mouse: Vec2,
    /// Number of frames
    pub frames: u32,
}

impl ReplaySegment {
    /// Hold `keys` for `frames` frames
    pub fn hold(keys: MoveKeys, frames: u32) -> Self {
        Self {
            keys,
            mouse: Vec2::zeros(),
            frames,
        }
    }

    /// Turn by `dx` pixels of mouse travel per frame
    pub fn turn(dx: f32, frames: u32) -> Self {
        Self {
            keys: MoveKeys::empty(),
            mouse: Vec2::new(dx, 0.0),
            frames,
        }
    }
}

/// Fixed-step input script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Delta time of every frame in seconds
    pub fixed_dt: f32,
    /// Segments in playback order
    pub segments: Vec<ReplaySegment>,
}

impl ReplayScript {
    /// Check the frame delta and segment inputs
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fixed_dt.is_finite() && self.fixed_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "Replay delta must be positive, got {}",
                self.fixed_dt
            )));
        }
        if let Some(index) = self
            .segments
            .iter()
            .position(|s| !(s.mouse.x.is_finite() && s.mouse.y.is_finite()))
        {
            return Err(ConfigError::Invalid(format!(
                "Replay segment {index} has non-finite mouse travel"
            )));
        }
        Ok(())
    }

    /// Total number of frames
    pub fn total_frames(&self) -> u64 {
        self.segments.iter().map(|s| u64::from(s.frames)).sum()
    }

    /// Expand the script into per-frame inputs
    pub fn frames(&self) -> impl Iterator<Item = FrameInput> + '_ {
        self.segments.iter().flat_map(move |segment| {
            let input = FrameInput::held(segment.keys, self.fixed_dt)
                .with_mouse(segment.mouse.x, segment.mouse.y);
            std::iter::repeat(input).take(segment.frames as usize)
        })
    }

    /// Step `walker` through every frame of the script
    pub fn run(&self, walker: &mut Walker) -> Vec<FrameReport> {
        log::info!(
            "Replaying {} segments ({} frames at {:.4}s)",
            self.segments.len(),
            self.total_frames(),
            self.fixed_dt
        );
        self.frames().map(|input| walker.step(&input)).collect()
    }
}

impl Default for ReplayScript {
    /// A short tour of the built-in corridor: walk in, bump the left wall,
    /// slide along it, turn half way round and walk back
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            segments: vec![
                ReplaySegment::hold(MoveKeys::FORWARD, 180),
                ReplaySegment::hold(MoveKeys::LEFT, 60),
                ReplaySegment::hold(MoveKeys::FORWARD | MoveKeys::LEFT, 60),
                ReplaySegment::turn(2.0 * constants::PI, 60),
                ReplaySegment::hold(MoveKeys::FORWARD, 120),
            ],
        }
    }
}

impl Config for ReplayScript {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MazeConfig;
    use crate::level::LevelLayout;

    fn corridor_walker() -> Walker {
        Walker::new(&LevelLayout::corridor(), &MazeConfig::default()).unwrap()
    }

    #[test]
    fn test_frames_expand_in_order() {
        let script = ReplayScript {
            fixed_dt: 0.02,
            segments: vec![
                ReplaySegment::hold(MoveKeys::FORWARD, 2),
                ReplaySegment::hold(MoveKeys::RIGHT, 0),
                ReplaySegment::turn(4.0, 1),
            ],
        };

        let frames: Vec<_> = script.frames().collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(script.total_frames(), 3);
        assert_eq!(frames[1], FrameInput::held(MoveKeys::FORWARD, 0.02));
        assert_eq!(frames[2].mouse_delta, Vec2::new(4.0, 0.0));
        assert!(frames.iter().all(|f| f.delta_time == 0.02));
    }

    #[test]
    fn test_replay_is_deterministic() {
        let script = ReplayScript::default();

        let first = script.run(&mut corridor_walker());
        let second = script.run(&mut corridor_walker());

        assert_eq!(first.len() as u64, script.total_frames());
        assert_eq!(first, second);
    }

    #[test]
    fn test_tour_hits_the_left_wall() {
        let reports = ReplayScript::default().run(&mut corridor_walker());

        assert!(reports.iter().any(|r| r.blocked_by.is_some()));
        assert!(reports.iter().any(|r| r.footstep));
        // Never leaves the corridor sideways
        assert!(reports.iter().all(|r| r.position.x.abs() < 0.25));
    }

    #[test]
    fn test_parse_script() {
        let text = r#"(
            fixed_dt: 0.05,
            segments: [
                (keys: "FORWARD | RIGHT", frames: 3),
                (mouse: (2.0, -1.0), frames: 1),
            ],
        )"#;
        let script: ReplayScript = ron::from_str(text).unwrap();

        assert!(script.validate().is_ok());
        assert_eq!(script.segments[0].keys, MoveKeys::FORWARD | MoveKeys::RIGHT);
        assert_eq!(script.segments[1].keys, MoveKeys::empty());
        assert_eq!(script.segments[1].mouse, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_zero_delta_is_invalid() {
        let script = ReplayScript {
            fixed_dt: 0.0,
            segments: Vec::new(),
        };
        assert!(matches!(script.validate(), Err(ConfigError::Invalid(_))));
    }
}
