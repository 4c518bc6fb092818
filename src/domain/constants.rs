//! Tuning constants.
//!
//! These are empirically tuned "feels right" values, not derived physical
//! quantities. `Tuning` carries them at runtime so a host can override any of
//! them; `Tuning::default()` keeps the exact stock values.

use serde::{Deserialize, Serialize};

/// Release within this distance of the right edge snaps the edge body back to it
pub const SNAP_THRESHOLD: f64 = 64.0;
/// Distance a body is pushed inside a wall after a clamp, so it does not re-trigger
pub const WALL_EPSILON: f64 = 1.0;
/// Floor for each velocity component after a wall or body collision
pub const MIN_COMPONENT_SPEED: f64 = 80.0;
/// Edge body bounces slower than this settle into Landed
pub const MIN_BOUNCE_SPEED: f64 = 90.0;
/// Minimum speed of a split-off body
pub const MIN_SPAWN_SPEED: f64 = 120.0;
/// Split-off body is placed this many source radii away from the source center
pub const SPAWN_OFFSET_FACTOR: f64 = 1.1;
/// Centers closer than this are treated as coincident
pub const COINCIDENT_EPSILON: f64 = 1e-4;
/// Source speeds below this count as "not moving" when reflecting
pub const REST_SPEED_EPSILON: f64 = 1e-3;

/// Random initial speed range per velocity component
pub const INITIAL_SPEED_MIN: f64 = 160.0;
pub const INITIAL_SPEED_MAX: f64 = 280.0;
/// Initial component below the floor is lifted to this
pub const INITIAL_SPEED_LIFT: f64 = 120.0;

/// Edge body footprint
pub const EDGE_BODY_WIDTH: f64 = 150.0;
pub const EDGE_BODY_HEIGHT: f64 = 200.0;
/// Swarm body visual diameter (collision radius is half of it)
pub const SWARM_BODY_SIZE: f64 = 140.0;

pub const MAX_GRAVITY: f64 = 2000.0;

/// Fallback directions for a split of a resting body (degrees)
pub const CANONICAL_SPAWN_ANGLES_DEG: [f64; 6] = [0.0, 45.0, 90.0, 135.0, 180.0, -90.0];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tuning {
    pub snap_threshold: f64,
    pub wall_epsilon: f64,
    pub min_component_speed: f64,
    pub min_bounce_speed: f64,
    pub min_spawn_speed: f64,
    pub spawn_offset_factor: f64,
    pub coincident_epsilon: f64,
    pub initial_speed_min: f64,
    pub initial_speed_max: f64,
    pub edge_body_width: f64,
    pub edge_body_height: f64,
    pub swarm_body_size: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD,
            wall_epsilon: WALL_EPSILON,
            min_component_speed: MIN_COMPONENT_SPEED,
            min_bounce_speed: MIN_BOUNCE_SPEED,
            min_spawn_speed: MIN_SPAWN_SPEED,
            spawn_offset_factor: SPAWN_OFFSET_FACTOR,
            coincident_epsilon: COINCIDENT_EPSILON,
            initial_speed_min: INITIAL_SPEED_MIN,
            initial_speed_max: INITIAL_SPEED_MAX,
            edge_body_width: EDGE_BODY_WIDTH,
            edge_body_height: EDGE_BODY_HEIGHT,
            swarm_body_size: SWARM_BODY_SIZE,
        }
    }
}
