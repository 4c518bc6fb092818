//! Swarm - free-floating bodies bouncing inside one region
//!
//! Each tick integrates gravity and velocity, bounces bodies off the region
//! walls, resolves overlapping pairs with an equal-mass restitution exchange
//! and re-clamps anything the pair pass pushed outside. A per-axis minimum
//! speed keeps bodies from crawling along walls.
//!
//! No rotation, no polygon shapes: every body is a circle.

mod arena;
mod body;
mod collision;
mod simulator;
mod spawn;
mod walls;

pub use arena::{BodyArena, BodyId};
pub use body::Body;
pub use simulator::{ImpactEvent, ImpactKind, SwarmSimulator, SwarmStats};
pub use spawn::SpawnReflector;
