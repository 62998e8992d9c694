//! Disc simulation
//!
//! Pure and platform-free:
//! - Time comes in as frame timestamps (ms), never read from a clock
//! - Surface bounds come in as plain numbers
//! - No rendering or platform dependencies

pub mod disc;
pub mod tick;
pub mod walls;

pub use disc::Disc;
pub use tick::{FrameOutcome, tick};
pub use walls::{Bounds, WallHits, reflect_off_walls};
