//! Errors raised while wiring the animation to its host

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FingerError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    CanvasNotFound(String),
    #[error("element is not a canvas")]
    NotACanvas,
    #[error("canvas has no 2d rendering context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid settings: {0}")]
    Config(#[from] serde_json::Error),
}
