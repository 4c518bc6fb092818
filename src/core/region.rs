use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

// ============================================================================
// REGION: AXIS-ALIGNED BOUNDS
// ============================================================================
//
// Both simulated surfaces (edge body, swarm) live inside a rectangle that the
// driver recomputes whenever the display layout changes. Coordinates follow
// the desktop convention: y grows upward, so the floor is `min_y`.

/// Axis-aligned rectangle, always normalized (`min <= max` on both axes)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRegion")]
pub struct Region {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRegion {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl From<RawRegion> for Region {
    fn from(raw: RawRegion) -> Self {
        Region::new(raw.min_x, raw.min_y, raw.max_x, raw.max_y)
    }
}

impl Region {
    /// Build a region from two corners in any order.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Build a region from an origin (bottom-left) and a size, like a screen frame.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[inline]
    pub fn min_x(&self) -> f64 { self.min_x }
    #[inline]
    pub fn min_y(&self) -> f64 { self.min_y }
    #[inline]
    pub fn max_x(&self) -> f64 { self.max_x }
    #[inline]
    pub fn max_y(&self) -> f64 { self.max_y }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }

    /// Smallest region covering both (used to merge several display frames).
    pub fn union(&self, other: &Region) -> Region {
        Region {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Shrink by `margin` on every side. An axis that cannot fit the margin
    /// collapses to its midpoint instead of inverting.
    pub fn inset(&self, margin: f64) -> Region {
        let (min_x, max_x) = inset_axis(self.min_x, self.max_x, margin);
        let (min_y, max_y) = inset_axis(self.min_y, self.max_y, margin);
        Region { min_x, min_y, max_x, max_y }
    }

    /// Nearest point inside the region.
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    /// True when a circle fits entirely inside (touching counts as inside).
    pub fn contains_circle(&self, center: Vec2, radius: f64) -> bool {
        center.x - radius >= self.min_x
            && center.x + radius <= self.max_x
            && center.y - radius >= self.min_y
            && center.y + radius <= self.max_y
    }
}

impl Default for Region {
    fn default() -> Self {
        Region::new(0.0, 0.0, 800.0, 600.0)
    }
}

fn inset_axis(min: f64, max: f64, margin: f64) -> (f64, f64) {
    let lo = min + margin;
    let hi = max - margin;
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = (min + max) * 0.5;
        (mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_corners() {
        let r = Region::new(10.0, 50.0, -10.0, 5.0);
        assert_eq!(r.min_x(), -10.0);
        assert_eq!(r.max_x(), 10.0);
        assert_eq!(r.min_y(), 5.0);
        assert_eq!(r.max_y(), 50.0);
    }

    #[test]
    fn inset_collapses_narrow_axis_to_midpoint() {
        let r = Region::new(0.0, 0.0, 10.0, 100.0).inset(20.0);
        assert_eq!(r.min_x(), 5.0);
        assert_eq!(r.max_x(), 5.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_y(), 80.0);
    }

    #[test]
    fn union_covers_both_frames() {
        let left = Region::from_origin_size(0.0, 0.0, 1440.0, 900.0);
        let right = Region::from_origin_size(1440.0, -100.0, 1920.0, 1080.0);
        let all = left.union(&right);
        assert_eq!(all.min_x(), 0.0);
        assert_eq!(all.max_x(), 3360.0);
        assert_eq!(all.min_y(), -100.0);
        assert_eq!(all.max_y(), 980.0);
    }

    #[test]
    fn deserialize_normalizes() {
        let r: Region =
            serde_json::from_str(r#"{"minX":100,"minY":0,"maxX":0,"maxY":50}"#).unwrap();
        assert_eq!(r.min_x(), 0.0);
        assert_eq!(r.max_x(), 100.0);
    }
}
