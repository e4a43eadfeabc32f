//! Footstep cue timing
//!
//! A footstep starts whenever the player moved this frame and the previous
//! footstep has finished. Holding a key against a wall does not move the
//! player, so it stays silent.

/// Tracks the footstep currently playing
#[derive(Debug, Clone, PartialEq)]
pub struct FootstepCue {
    length: f32,
    remaining: f32,
    started: u64,
}

impl FootstepCue {
    /// Create a cue scheduler for a sound lasting `length` seconds
    pub fn new(length: f32) -> Self {
        Self {
            length: length.max(0.0),
            remaining: 0.0,
            started: 0,
        }
    }

    /// Advance by one frame; returns true when a new footstep should start
    pub fn update(&mut self, moved: bool, delta_time: f32) -> bool {
        self.remaining = (self.remaining - delta_time).max(0.0);

        if moved && self.is_finished() {
            self.remaining = self.length;
            self.started += 1;
            log::trace!("Footstep #{} started", self.started);
            return true;
        }
        false
    }

    /// Whether no footstep is playing
    pub fn is_finished(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Number of footsteps started so far
    pub const fn started(&self) -> u64 {
        self.started
    }
}

impl Default for FootstepCue {
    fn default() -> Self {
        Self::new(0.45)
    }
}
