use crate::core::Vec2;

/// Free-floating swarm body - a circle moving as a point mass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    // === Physics State ===
    /// World position of the centroid
    pub center: Vec2,
    /// Signed velocity (units per second)
    pub velocity: Vec2,
    /// Excluded from integration and collision while set
    pub paused: bool,

    // === Shape ===
    /// Collision radius, fixed at creation
    radius: f64,
}

impl Body {
    /// Create a body. `radius` must be positive; that is the caller's contract.
    pub fn new(center: Vec2, velocity: Vec2, radius: f64) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        Self {
            center,
            velocity,
            paused: false,
            radius,
        }
    }

    /// Create a body whose collision circle is inscribed in a visual square of `size`
    pub fn from_visual_size(center: Vec2, velocity: Vec2, size: f64) -> Self {
        Self::new(center, velocity, size * 0.5)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Kinetic energy with unit mass (all swarm bodies weigh the same)
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity.length_squared()
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }
}
