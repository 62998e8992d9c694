//! 2D rendering
//!
//! The disc is drawn through `DrawSurface`, the handful of path primitives a
//! canvas 2D context offers. The browser context implements it on wasm32;
//! `RecordingSurface` implements it everywhere else.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::{draw_disc, nail_points};

use crate::sim::Bounds;

/// A fixed-size surface accepting filled path drawing
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn set_fill_style(&mut self, color: &str);
    fn begin_path(&mut self);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn fill(&mut self);

    /// Surface extent as simulation bounds
    fn bounds(&self) -> Bounds {
        Bounds::new(self.width(), self.height())
    }
}
