use rand::Rng;

use crate::core::{Region, Vec2};

// Footprint helpers. `position` is the bottom-left corner of a `size` box.

/// X that puts the footprint flush with the right edge (never left of `min_x`)
pub(super) fn right_edge_x(region: &Region, size: Vec2) -> f64 {
    (region.max_x() - size.x).max(region.min_x())
}

pub(super) fn distance_to_right_edge(region: &Region, position: Vec2, size: Vec2) -> f64 {
    (region.max_x() - (position.x + size.x)).abs()
}

/// Flush right, random height with the whole footprint on screen
pub(super) fn random_right_edge<R: Rng + ?Sized>(region: &Region, size: Vec2, rng: &mut R) -> Vec2 {
    let min_y = region.min_y();
    let upper = (region.max_y() - size.y).max(min_y);
    let y = if upper > min_y { rng.gen_range(min_y..=upper) } else { min_y };
    Vec2::new(right_edge_x(region, size), y)
}

/// Keep the footprint inside the region; an oversized axis pins to the minimum.
pub(super) fn clamp_footprint(region: &Region, size: Vec2, position: Vec2) -> Vec2 {
    let max_x = (region.max_x() - size.x).max(region.min_x());
    let max_y = (region.max_y() - size.y).max(region.min_y());
    Vec2::new(
        position.x.clamp(region.min_x(), max_x),
        position.y.clamp(region.min_y(), max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn random_placement_keeps_footprint_on_screen() {
        let mut rng = SmallRng::seed_from_u64(2);
        let region = Region::new(0.0, 25.0, 1440.0, 875.0);
        let size = Vec2::new(150.0, 200.0);
        for _ in 0..32 {
            let p = random_right_edge(&region, size, &mut rng);
            assert_eq!(p.x, 1290.0);
            assert!(p.y >= 25.0 && p.y <= 675.0);
        }
    }

    #[test]
    fn short_region_pins_to_floor() {
        let mut rng = SmallRng::seed_from_u64(2);
        let region = Region::new(0.0, 0.0, 100.0, 50.0);
        let p = random_right_edge(&region, Vec2::new(150.0, 200.0), &mut rng);
        assert_eq!(p, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn clamp_footprint_limits_both_axes() {
        let region = Region::new(0.0, 0.0, 1000.0, 800.0);
        let size = Vec2::new(150.0, 200.0);
        assert_eq!(clamp_footprint(&region, size, Vec2::new(-40.0, 900.0)), Vec2::new(0.0, 600.0));
        assert_eq!(distance_to_right_edge(&region, Vec2::new(800.0, 0.0), size), 50.0);
    }
}
