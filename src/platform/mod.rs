//! Platform layer
//!
//! Owns the frame scheduling: the browser's requestAnimationFrame loop on
//! wasm32 and a fixed-interval scheduler for headless runs. Both drive an
//! `Animation`.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::FixedStepScheduler;

use crate::Settings;
use crate::renderer::{DrawSurface, draw_disc};
use crate::sim::{Disc, FrameOutcome, tick};

/// A disc bound to the surface it draws on
pub struct Animation<S: DrawSurface> {
    pub disc: Disc,
    pub settings: Settings,
    pub surface: S,
    /// Frames handled since start
    pub frames: u64,
    /// Wall contacts since start
    pub bounces: u64,
}

impl<S: DrawSurface> Animation<S> {
    /// Build the disc from `settings` and draw it once
    pub fn new(settings: Settings, surface: S) -> Self {
        let disc = Disc::from_settings(&settings);
        let mut animation = Self {
            disc,
            settings,
            surface,
            frames: 0,
            bounces: 0,
        };
        draw_disc(&mut animation.surface, &animation.disc, &animation.settings);
        animation
    }

    /// Run one frame at timestamp `time_ms` and redraw
    pub fn on_frame(&mut self, time_ms: f64) -> FrameOutcome {
        let bounds = self.surface.bounds();
        let outcome = tick(&mut self.disc, &self.settings, bounds, time_ms);

        self.frames += 1;
        self.bounces += outcome.hits().count() as u64;

        draw_disc(&mut self.surface, &self.disc, &self.settings);
        outcome
    }
}
