//! Disc and nail drawing

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

use super::DrawSurface;
use crate::sim::Disc;
use crate::{Settings, rotate_vector};

/// Triangle vertices of the nail for a disc heading along `heading`.
///
/// The base point sits `radius / 2` along local +Y; it and its two copies at
/// ±120° are turned a quarter back so that the first vertex points along the
/// heading, then moved to `center`.
pub fn nail_points(center: DVec2, radius: f64, heading: f64) -> [DVec2; 3] {
    let base = DVec2::new(0.0, radius / 2.0);
    let turn = heading - FRAC_PI_2;
    [0.0, 1.0, 2.0].map(|k| rotate_vector(base, k * TAU / 3.0 + turn) + center)
}

fn draw_circle(surface: &mut impl DrawSurface, disc: &Disc, color: &str) {
    surface.set_fill_style(color);
    surface.begin_path();
    surface.arc(disc.pos.x, disc.pos.y, disc.radius, 0.0, TAU);
    surface.fill();
}

fn draw_nail(surface: &mut impl DrawSurface, disc: &Disc, color: &str) {
    let [p0, p1, p2] = nail_points(disc.pos, disc.radius, disc.heading());

    surface.set_fill_style(color);
    surface.begin_path();
    surface.move_to(p0.x, p0.y);
    surface.line_to(p1.x, p1.y);
    surface.line_to(p2.x, p2.y);
    surface.line_to(p0.x, p0.y);
    surface.fill();
}

/// Draw the disc, and its nail when enabled. The surface is not cleared.
pub fn draw_disc(surface: &mut impl DrawSurface, disc: &Disc, settings: &Settings) {
    draw_circle(surface, disc, &settings.fill_color);
    if settings.has_orientation_indicator {
        draw_nail(surface, disc, &settings.nail_color);
    }
}
