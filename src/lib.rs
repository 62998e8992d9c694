//! Finger Ball - a bouncing disc with a heading nail
//!
//! Core modules:
//! - `sim`: Disc state, wall reflection and the per-frame update
//! - `renderer`: Drawing surface abstraction and disc/nail rendering
//! - `platform`: Frame schedulers (browser requestAnimationFrame, headless)
//! - `settings`: Variant configuration with LocalStorage overrides

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::FingerError;
pub use settings::{Settings, Variant};

use glam::DVec2;

/// Default scene constants
pub mod consts {
    /// Milliseconds per second (speeds are configured per second, simulated per ms)
    pub const MS_PER_SECOND: f64 = 1000.0;

    /// Shipped disc: vertical and horizontal speed in px/s
    pub const DEFAULT_VERTICAL_SPEED: f64 = 107.0;
    pub const DEFAULT_HORIZONTAL_SPEED: f64 = 23.0;

    /// Shipped disc center and radius
    pub const DEFAULT_CENTER_X: f64 = 250.0;
    pub const DEFAULT_CENTER_Y: f64 = 250.0;
    pub const DEFAULT_RADIUS: f64 = 20.0;

    /// Colors
    pub const FINGER_COLOR: &str = "#ff0";
    pub const NAIL_COLOR: &str = "red";

    /// Surface size used by the headless runner
    pub const HEADLESS_WIDTH: f64 = 500.0;
    pub const HEADLESS_HEIGHT: f64 = 500.0;
    /// Display refresh interval emulated by the headless runner (60 Hz)
    pub const HEADLESS_FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Rotate a vector by `angle` radians (counterclockwise in a right-handed frame)
#[inline]
pub fn rotate_vector(v: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    rotate_vector_by_sin_cos(v, sin, cos)
}

/// Rotate a vector given a precomputed sine and cosine
#[inline]
pub fn rotate_vector_by_sin_cos(v: DVec2, sin: f64, cos: f64) -> DVec2 {
    DVec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Angle of a velocity vector, `atan2(y, x)`
#[inline]
pub fn heading(velocity: DVec2) -> f64 {
    velocity.y.atan2(velocity.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn approx(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = rotate_vector(DVec2::new(1.0, 0.0), FRAC_PI_2);
        assert!(approx(v, DVec2::new(0.0, 1.0)));

        let v = rotate_vector(DVec2::new(0.0, 10.0), -FRAC_PI_2);
        assert!(approx(v, DVec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_rotate_by_sin_cos_matches_angle() {
        let v = DVec2::new(3.0, -4.0);
        let angle = 0.7_f64;
        let a = rotate_vector(v, angle);
        let b = rotate_vector_by_sin_cos(v, angle.sin(), angle.cos());
        assert!(approx(a, b));
        assert!((a.length() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading() {
        assert!((heading(DVec2::new(1.0, 0.0))).abs() < 1e-12);
        assert!((heading(DVec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-12);
        assert!((heading(DVec2::new(-1.0, 0.0)) - PI).abs() < 1e-12);
    }
}
