//! Placement of new swarm bodies.
//!
//! A split mirrors its source: the child leaves in the opposite direction
//! from just outside the source's circle, so the pair does not overlap on the
//! next tick. Fresh bodies (first show, reset) start at the region center
//! with a random diagonal velocity.

use rand::Rng;

use crate::core::{Region, Vec2};
use crate::domain::constants::{CANONICAL_SPAWN_ANGLES_DEG, INITIAL_SPEED_LIFT, REST_SPEED_EPSILON};
use crate::domain::Tuning;

use super::body::Body;

pub struct SpawnReflector {
    min_spawn_speed: f64,
    offset_factor: f64,
    min_component_speed: f64,
    initial_speed_min: f64,
    initial_speed_max: f64,
}

impl SpawnReflector {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            min_spawn_speed: tuning.min_spawn_speed,
            offset_factor: tuning.spawn_offset_factor,
            min_component_speed: tuning.min_component_speed,
            initial_speed_min: tuning.initial_speed_min,
            initial_speed_max: tuning.initial_speed_max,
        }
    }

    /// Center and velocity for a body of `radius` split off `source`.
    pub fn reflect<R: Rng + ?Sized>(
        &self,
        source: &Body,
        radius: f64,
        region: &Region,
        rng: &mut R,
    ) -> (Vec2, Vec2) {
        let source_speed = source.velocity.length();
        let direction = if source_speed < REST_SPEED_EPSILON {
            let pick = rng.gen_range(0..CANONICAL_SPAWN_ANGLES_DEG.len());
            Vec2::from_angle(CANONICAL_SPAWN_ANGLES_DEG[pick].to_radians())
        } else {
            -source.velocity * (1.0 / source_speed)
        };

        let speed = source_speed.max(self.min_spawn_speed);
        let velocity = direction * speed;

        let offset = source.radius() * self.offset_factor;
        let center = region
            .inset(radius)
            .clamp_point(source.center + direction * offset);

        (center, velocity)
    }

    /// Child body for a split; same radius as the source.
    pub fn split<R: Rng + ?Sized>(&self, source: &Body, region: &Region, rng: &mut R) -> Body {
        let (center, velocity) = self.reflect(source, source.radius(), region, rng);
        Body::new(center, velocity, source.radius())
    }

    /// Random velocity for a fresh body: each component in the initial speed
    /// range with a random sign.
    pub fn random_velocity<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(self.random_component(rng), self.random_component(rng))
    }

    /// Fresh body of visual `size` at the region center.
    pub fn initial<R: Rng + ?Sized>(&self, region: &Region, size: f64, rng: &mut R) -> Body {
        Body::from_visual_size(region.center(), self.random_velocity(rng), size)
    }

    fn random_component<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let lo = self.initial_speed_min.min(self.initial_speed_max);
        let hi = self.initial_speed_min.max(self.initial_speed_max);
        let magnitude = if hi > lo { rng.gen_range(lo..hi) } else { lo };
        let v = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
        if v.abs() < self.min_component_speed {
            INITIAL_SPEED_LIFT.copysign(v)
        } else {
            v
        }
    }
}
