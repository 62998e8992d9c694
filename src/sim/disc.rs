//! The disc entity

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::Settings;
use crate::consts::MS_PER_SECOND;

/// The bouncing disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    /// Center, in surface units
    pub pos: DVec2,
    /// Velocity in units per millisecond
    pub vel: DVec2,
    pub radius: f64,
    /// Timestamp (ms) of the last frame handed to `tick`
    pub last_frame_time: f64,
}

impl Disc {
    /// Create a disc from speeds in units per second.
    ///
    /// Argument order follows the original constructor: vertical speed first.
    /// The frame clock starts at zero, so the first frame advances by the
    /// full timestamp the scheduler reports.
    pub fn new(
        vertical_speed: f64,
        horizontal_speed: f64,
        center_x: f64,
        center_y: f64,
        radius: f64,
    ) -> Self {
        Self {
            pos: DVec2::new(center_x, center_y),
            vel: DVec2::new(horizontal_speed, vertical_speed) / MS_PER_SECOND,
            radius,
            last_frame_time: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.initial_velocity.vertical,
            settings.initial_velocity.horizontal,
            settings.initial_position.x,
            settings.initial_position.y,
            settings.radius,
        )
    }

    /// Advance the position by `delta_ms` of travel
    #[inline]
    pub fn advance(&mut self, delta_ms: f64) {
        self.pos += self.vel * delta_ms;
    }

    /// Heading of the current velocity, radians
    #[inline]
    pub fn heading(&self) -> f64 {
        crate::heading(self.vel)
    }

    /// Speed in units per millisecond
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }
}
