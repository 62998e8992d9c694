//! Browser frame loop (WASM only)
//!
//! The animation lives in an `Rc<RefCell<_>>` shared with a one-shot
//! requestAnimationFrame closure that re-arms itself every frame. The loop
//! runs until the page goes away.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::Animation;
use crate::renderer::{CanvasSurface, DrawSurface};
use crate::{FingerError, Settings};

/// Element id of the canvas the finger is drawn on
pub const CANVAS_ID: &str = "canvas";

type WebAnimation = Rc<RefCell<Animation<CanvasSurface>>>;

/// Build the animation on the page canvas and start the frame loop
pub fn start(settings: Settings) -> Result<(), FingerError> {
    let window = web_sys::window().ok_or(FingerError::NoWindow)?;
    let document = window.document().ok_or(FingerError::NoDocument)?;

    let surface = CanvasSurface::from_document(&document, CANVAS_ID)?;
    log::info!(
        "Canvas {}x{}, nail {}, walls {}",
        surface.width(),
        surface.height(),
        settings.has_orientation_indicator,
        settings.reflect_off_walls
    );

    let animation = Rc::new(RefCell::new(Animation::new(settings, surface)));
    request_animation_frame(animation)
}

fn request_animation_frame(animation: WebAnimation) -> Result<(), FingerError> {
    let window = web_sys::window().ok_or(FingerError::NoWindow)?;
    let closure = Closure::once(move |time: f64| {
        frame_loop(animation, time);
    });
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| FingerError::Js(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}

fn frame_loop(animation: WebAnimation, time: f64) {
    {
        let mut a = animation.borrow_mut();
        a.on_frame(time);
    }

    if let Err(e) = request_animation_frame(animation) {
        log::error!("Frame loop stopped: {}", e);
    }
}
