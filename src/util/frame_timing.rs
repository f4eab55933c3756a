//! Wall-clock frame timing for driving manipulator updates.

use web_time::{Duration, Instant};

/// Default upper bound on a single step, in seconds.
pub const DEFAULT_MAX_STEP: f64 = 0.25;

/// Frame clock producing the `dt` fed to manipulator updates, with a
/// smoothed FPS estimate.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Last tick timestamp
    last_tick: Instant,
    /// Longest step ever reported
    max_step: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock now with the default maximum step.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_step(DEFAULT_MAX_STEP)
    }

    /// Start a clock now that never reports more than `max_step` seconds
    /// per tick. Non-positive or non-finite values use the default.
    #[must_use]
    pub fn with_max_step(max_step: f64) -> Self {
        let max_step = if max_step.is_finite() && max_step > 0.0 {
            max_step
        } else {
            DEFAULT_MAX_STEP
        };
        Self {
            last_tick: Instant::now(),
            max_step: Duration::from_secs_f64(max_step),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,
        }
    }

    /// Seconds since the previous tick (or construction), clamped to the
    /// maximum step.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.record(elapsed)
    }

    fn record(&mut self, elapsed: Duration) -> f64 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        elapsed.min(self.max_step).as_secs_f64()
    }

    /// Restart timing from now, e.g. after the application was paused.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Longest step [`FrameClock::tick`] will report, in seconds.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step.as_secs_f64()
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
