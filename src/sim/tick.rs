//! Per-frame update
//!
//! `tick` is the whole simulation step: take the elapsed time since the last
//! frame, move the disc, bounce it. Rendering and rescheduling are left to the
//! caller.

use super::Disc;
use super::walls::{Bounds, WallHits, reflect_off_walls};
use crate::Settings;

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The disc moved by `delta_ms` and touched `hits`
    Advanced { delta_ms: f64, hits: WallHits },
    /// The gap since the previous frame exceeded the stale threshold; the
    /// clock was resynchronised and the disc left in place
    Stale { delta_ms: f64 },
}

impl FrameOutcome {
    pub fn hits(&self) -> WallHits {
        match self {
            FrameOutcome::Advanced { hits, .. } => *hits,
            FrameOutcome::Stale { .. } => WallHits::default(),
        }
    }
}

/// Advance the disc to frame timestamp `time_ms`
pub fn tick(disc: &mut Disc, settings: &Settings, bounds: Bounds, time_ms: f64) -> FrameOutcome {
    let delta_ms = time_ms - disc.last_frame_time;
    disc.last_frame_time = time_ms;

    if let Some(threshold) = settings.stale_frame_threshold_ms {
        if delta_ms > threshold {
            log::warn!(
                "Frame gap of {:.0}ms exceeds {:.0}ms, resyncing without moving",
                delta_ms,
                threshold
            );
            return FrameOutcome::Stale { delta_ms };
        }
    }

    disc.advance(delta_ms);

    let hits = if settings.reflect_off_walls {
        reflect_off_walls(disc, bounds)
    } else {
        WallHits::default()
    };

    log::trace!(
        "t={:.1} dt={:.2} pos=({:.2}, {:.2})",
        time_ms,
        delta_ms,
        disc.pos.x,
        disc.pos.y
    );

    FrameOutcome::Advanced { delta_ms, hits }
}
