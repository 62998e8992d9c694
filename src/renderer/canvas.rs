//! Canvas 2D context surface (WASM only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::DrawSurface;
use crate::FingerError;

pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Look up `<canvas id={canvas_id}>` and take its 2D context
    pub fn from_document(document: &Document, canvas_id: &str) -> Result<Self, FingerError> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| FingerError::CanvasNotFound(canvas_id.to_string()))?
            .dyn_into()
            .map_err(|_| FingerError::NotACanvas)?;

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|e| FingerError::Js(format!("{:?}", e)))?
            .ok_or(FingerError::NoContext)?
            .dyn_into()
            .map_err(|_| FingerError::NoContext)?;

        Ok(Self {
            context,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }
}

impl DrawSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_fill_style(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        // Throws on a negative radius
        if let Err(e) = self.context.arc(x, y, radius, start_angle, end_angle) {
            log::warn!("arc rejected: {:?}", e);
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn fill(&mut self) {
        self.context.fill();
    }
}
