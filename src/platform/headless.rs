//! Fixed-interval frame scheduler for runs without a display

use super::Animation;
use crate::renderer::DrawSurface;

/// Hands out timestamps `interval, 2 * interval, ...` like a steady display
#[derive(Debug, Clone)]
pub struct FixedStepScheduler {
    pub interval_ms: f64,
    now_ms: f64,
}

impl FixedStepScheduler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            now_ms: 0.0,
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Next frame timestamp
    pub fn next_frame(&mut self) -> f64 {
        self.now_ms += self.interval_ms;
        self.now_ms
    }

    /// Drive `frames` frames of the animation
    pub fn run<S: DrawSurface>(&mut self, animation: &mut Animation<S>, frames: u32) {
        for _ in 0..frames {
            let t = self.next_frame();
            animation.on_frame(t);
        }
        log::debug!("Ran {} frames, clock at {:.1}ms", frames, self.now_ms);
    }
}
