//! Wall reflection
//!
//! Each of the four walls is checked on its own, every frame, so a corner
//! hit flips both axes in one step. Only one crossing per wall is undone:
//! a disc that overshoots by more than the free span can still tunnel.

use glam::DVec2;

use super::Disc;

/// Rectangular surface bounds with the origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a disc of `radius` centered at `pos` is fully on the surface
    pub fn contains(&self, pos: DVec2, radius: f64) -> bool {
        pos.x >= radius
            && pos.x <= self.width - radius
            && pos.y >= radius
            && pos.y <= self.height - radius
    }
}

/// Walls touched during one reflection pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }

    pub fn count(&self) -> u32 {
        [self.left, self.right, self.top, self.bottom]
            .iter()
            .filter(|&&hit| hit)
            .count() as u32
    }
}

/// Mirror a coordinate back across `boundary`
#[inline]
fn mirror(coord: f64, boundary: f64) -> f64 {
    boundary + (boundary - coord)
}

/// Reflect the disc off any wall it has reached.
///
/// Touching a wall counts as crossing it. The crossed velocity component
/// flips sign and the penetration depth is mirrored back inside.
pub fn reflect_off_walls(disc: &mut Disc, bounds: Bounds) -> WallHits {
    let mut hits = WallHits::default();
    let r = disc.radius;

    let left = r;
    if disc.pos.x <= left {
        disc.vel.x = -disc.vel.x;
        disc.pos.x = mirror(disc.pos.x, left);
        hits.left = true;
    }

    let right = bounds.width - r;
    if disc.pos.x >= right {
        disc.vel.x = -disc.vel.x;
        disc.pos.x = mirror(disc.pos.x, right);
        hits.right = true;
    }

    let top = r;
    if disc.pos.y <= top {
        disc.vel.y = -disc.vel.y;
        disc.pos.y = mirror(disc.pos.y, top);
        hits.top = true;
    }

    let bottom = bounds.height - r;
    if disc.pos.y >= bottom {
        disc.vel.y = -disc.vel.y;
        disc.pos.y = mirror(disc.pos.y, bottom);
        hits.bottom = true;
    }

    if hits.any() {
        log::debug!(
            "Bounce {:?} -> pos ({:.2}, {:.2}) vel ({:.4}, {:.4})",
            hits,
            disc.pos.x,
            disc.pos.y,
            disc.vel.x,
            disc.vel.y
        );
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn disc_at(x: f64, y: f64, vx: f64, vy: f64) -> Disc {
        let mut disc = Disc::new(0.0, 0.0, x, y, 20.0);
        disc.vel = DVec2::new(vx, vy);
        disc
    }

    #[test]
    fn test_no_contact() {
        let mut disc = disc_at(250.0, 250.0, 0.1, -0.1);
        let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
        assert!(!hits.any());
        assert_eq!(disc.pos, DVec2::new(250.0, 250.0));
        assert_eq!(disc.vel, DVec2::new(0.1, -0.1));
    }

    #[test]
    fn test_left_wall() {
        let mut disc = disc_at(19.95, 250.0, -0.05, 0.0);
        let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
        assert!(hits.left);
        assert_eq!(hits.count(), 1);
        assert!((disc.vel.x - 0.05).abs() < 1e-12);
        assert!((disc.pos.x - 20.05).abs() < 1e-9);
    }

    #[test]
    fn test_right_and_bottom_walls() {
        let mut disc = disc_at(483.0, 490.0, 0.2, 0.3);
        let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
        assert!(hits.right && hits.bottom);
        assert!(!hits.left && !hits.top);
        // Right wall at 480, overflow 3 -> 477; bottom at 480, overflow 10 -> 470
        assert!((disc.pos.x - 477.0).abs() < 1e-9);
        assert!((disc.pos.y - 470.0).abs() < 1e-9);
        assert_eq!(disc.vel, DVec2::new(-0.2, -0.3));
    }

    #[test]
    fn test_top_wall() {
        let mut disc = disc_at(100.0, 12.0, 0.0, -0.4);
        let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
        assert!(hits.top);
        assert!((disc.pos.y - 28.0).abs() < 1e-9);
        assert!((disc.vel.y - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_touching_counts_as_contact() {
        let mut disc = disc_at(20.0, 250.0, -0.1, 0.0);
        let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
        assert!(hits.left);
        assert_eq!(disc.pos.x, 20.0);
        assert!((disc.vel.x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_deep_overshoot_is_not_corrected() {
        // Far past the left wall: mirroring lands past the right wall, which
        // then reflects it again. Two flips leave the velocity unchanged.
        let mut disc = disc_at(-1200.0, 250.0, -1.0, 0.0);
        let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
        assert!(hits.left && hits.right);
        assert_eq!(disc.vel.x, -1.0);
        assert!(!Bounds::new(500.0, 500.0).contains(disc.pos, disc.radius));
    }

    proptest! {
        #[test]
        fn prop_reflection_preserves_magnitude(
            x in -10.0f64..510.0,
            y in -10.0f64..510.0,
            vx in -2.0f64..2.0,
            vy in -2.0f64..2.0,
        ) {
            let mut disc = disc_at(x, y, vx, vy);
            let hits = reflect_off_walls(&mut disc, Bounds::new(500.0, 500.0));
            let flips_x = hits.left as u32 + hits.right as u32;
            let flips_y = hits.top as u32 + hits.bottom as u32;
            let expect_x = if flips_x % 2 == 1 { -vx } else { vx };
            let expect_y = if flips_y % 2 == 1 { -vy } else { vy };
            prop_assert_eq!(disc.vel.x, expect_x);
            prop_assert_eq!(disc.vel.y, expect_y);
        }

        #[test]
        fn prop_overflow_mirroring(depth in 0.0f64..50.0, y in 30.0f64..470.0) {
            let bounds = Bounds::new(500.0, 500.0);

            let mut left = disc_at(20.0 - depth, y, -0.1, 0.0);
            reflect_off_walls(&mut left, bounds);
            prop_assert!((left.pos.x - (20.0 + depth)).abs() < 1e-9);

            let mut right = disc_at(480.0 + depth, y, 0.1, 0.0);
            reflect_off_walls(&mut right, bounds);
            prop_assert!((right.pos.x - (480.0 - depth)).abs() < 1e-9);
        }

        #[test]
        fn prop_shallow_overshoot_is_contained(
            x in 0.0f64..500.0,
            y in 0.0f64..500.0,
        ) {
            // Penetration never exceeds the free span (460) here
            let bounds = Bounds::new(500.0, 500.0);
            let mut disc = disc_at(x, y, 0.1, 0.1);
            reflect_off_walls(&mut disc, bounds);
            prop_assert!(bounds.contains(disc.pos, disc.radius));
        }
    }
}
