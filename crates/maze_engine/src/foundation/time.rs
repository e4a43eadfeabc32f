//! Frame timing utilities

use std::time::{Duration, Instant};

/// Simulated frame clock
///
/// Counts frames and accumulates the delta times the simulation was stepped
/// with. Deltas come from the caller (a real frame timer or a replay script),
/// never from the wall clock, so replays stay deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    max_delta: f32,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl FrameClock {
    /// Create a clock that caps each step at `max_delta` seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            max_delta,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance one frame and return the delta the frame should use
    ///
    /// Negative or non-finite deltas count as zero; long stalls are capped so a
    /// paused host does not teleport the camera on resume.
    pub fn tick(&mut self, delta: f32) -> f32 {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        if delta > self.max_delta {
            log::debug!("Frame delta {:.3}s capped to {:.3}s", delta, self.max_delta);
        }
        self.delta_time = delta.min(self.max_delta);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Delta used by the most recent frame
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total simulated time in seconds
    pub const fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Number of frames stepped so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(0.1)
    }
}

/// Simple stopwatch for measuring elapsed wall time
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    /// Create a stopwatch that starts immediately
    pub fn start_new() -> Self {
        Self { started: Instant::now() }
    }

    /// Time since the stopwatch started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_accumulates() {
        let mut clock = FrameClock::new(0.1);
        clock.tick(0.02);
        clock.tick(0.03);

        assert_eq!(clock.frame_count(), 2);
        assert_relative_eq!(clock.total_time(), 0.05, epsilon = 1e-6);
        assert_relative_eq!(clock.delta_time(), 0.03, epsilon = 1e-6);
    }

    #[test]
    fn test_clock_caps_and_rejects_bad_deltas() {
        let mut clock = FrameClock::new(0.1);

        assert_relative_eq!(clock.tick(2.5), 0.1);
        assert_eq!(clock.tick(-1.0), 0.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert_eq!(clock.frame_count(), 3);
    }
}
