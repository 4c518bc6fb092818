//! Deskpet Engine - physics for desktop pet animation in WASM
//!
//! Two independent simulations share one tick:
//! - an edge body that clings to the right screen edge, can be dragged and
//!   falls under gravity when released away from the edge
//! - a swarm of circular bodies bouncing elastically inside a region
//!
//! Architecture:
//! - core/        - Vectors, regions, bounds lookup
//! - domain/      - Parameters, tuning constants, errors
//! - systems/     - Edge body state machine, swarm simulator
//! - simulation/  - Orchestration and wasm facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Thread pool initialization for the `parallel` swarm passes
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🐾 Deskpet WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{BoundsProvider, FixedBounds, Region, RegionSnapshot, Scope, Vec2};
pub use domain::{ConfigError, FrameRate, PhysicsParams, Tuning};
pub use simulation::{PerfStats, PetWorldCore, TickReport, World};
pub use systems::edge_body::{EdgeBody, EdgeEffect, EdgeInput, EdgeState};
pub use systems::swarm::{
    Body, BodyArena, BodyId, ImpactEvent, ImpactKind, SpawnReflector, SwarmSimulator, SwarmStats,
};
