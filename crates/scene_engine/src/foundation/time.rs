//! Time management utilities

use std::time::Instant;

/// Nominal frame duration used when no measured delta is available
pub const NOMINAL_FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Frame timer feeding per-frame deltas to the render loop
///
/// The first call to [`FrameTimer::tick`] reports no delta, since there is no
/// previous frame to measure against.
#[derive(Debug)]
pub struct FrameTimer {
    last_frame: Option<Instant>,
    delta_time: Option<f32>,
    total_time: f32,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: None,
            delta_time: None,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the timer by one frame and return the measured delta in seconds
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        self.delta_time = self
            .last_frame
            .map(|last| now.duration_since(last).as_secs_f32());
        if let Some(delta) = self.delta_time {
            self.total_time += delta;
        }
        self.last_frame = Some(now);
        self.frame_count += 1;
        self.delta_time
    }

    /// Time between the two most recent ticks
    pub fn delta_time(&self) -> Option<f32> {
        self.delta_time
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average FPS since the first tick
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count.saturating_sub(1) as f32 / self.total_time
        } else {
            0.0
        }
    }
}
