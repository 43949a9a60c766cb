//! Frame timing
//!
//! The browser hands every animation callback a timestamp; [`FrameClock`]
//! turns consecutive timestamps into capped frame deltas. Nothing here reads a
//! clock, so tests feed it whatever sequence they like.

use crate::consts::MAX_FRAME_DT_MS;

/// Converts callback timestamps (ms) into simulation deltas (ms)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT_MS)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self { last: None, max_dt }
    }

    /// Delta since the previous call, clamped to `[0, max_dt]`.
    /// The first call after construction or [`FrameClock::restart`] yields 0.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last = Some(now_ms);
        dt
    }

    /// Measure the next delta from `now_ms`
    pub fn restart(&mut self, now_ms: f64) {
        self.last = Some(now_ms);
    }
}
