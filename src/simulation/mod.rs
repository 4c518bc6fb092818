//! PetWorld - orchestration of the edge body and the swarm
//!
//! The core only orchestrates: the edge body lives in systems/edge_body,
//! swarm integration and collisions in systems/swarm. This module holds the
//! per-tick inputs (parameters, region snapshot, RNG) and routes driver
//! signals to the right system.
//!
//! Each tick is a synchronous transformation; nothing here blocks or keeps
//! references across ticks.

use rand::rngs::SmallRng;

use crate::core::{BoundsProvider, Region, RegionSnapshot, Scope, Vec2};
use crate::domain::{ConfigError, PhysicsParams, Tuning};
use crate::systems::edge_body::{EdgeBody, EdgeEffect, EdgeInput, EdgeState};
use crate::systems::swarm::{Body, BodyArena, BodyId, ImpactEvent, SpawnReflector, SwarmSimulator};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "edge/edge.rs"]
mod edge;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Everything the driver needs to react to after one tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub edge: Vec<EdgeEffect>,
    pub impacts: Vec<ImpactEvent>,
}

/// The simulation world
pub struct PetWorldCore {
    // Configuration
    params: PhysicsParams,
    tuning: Tuning,
    regions: RegionSnapshot,

    // Systems
    edge: Option<EdgeBody>,
    swarm: BodyArena,
    simulator: SwarmSimulator,
    reflector: SpawnReflector,

    // State
    rng: SmallRng,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PetWorldCore {
    /// Create a world with default tuning and both regions set to `region`.
    pub fn new(region: Region, seed: u64) -> Self {
        init::create_world_core(region, Tuning::default(), seed)
    }

    pub fn with_tuning(region: Region, tuning: Tuning, seed: u64) -> Self {
        init::create_world_core(region, tuning, seed)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn params(&self) -> &PhysicsParams { &self.params }

    pub fn tuning(&self) -> &Tuning { &self.tuning }

    pub fn region(&self, scope: Scope) -> Region { self.regions.get(scope) }

    // === SETTINGS ===

    /// Replace the physics parameters (clamped on the way in). Applies from the next tick.
    pub fn set_params(&mut self, params: PhysicsParams) {
        settings::set_params(self, params);
    }

    pub fn load_params_json(&mut self, json: &str) -> Result<(), ConfigError> {
        settings::load_params_json(self, json)
    }

    /// Pull fresh regions after a display configuration change.
    pub fn refresh_regions(&mut self, provider: &dyn BoundsProvider) {
        settings::refresh_regions(self, provider);
    }

    pub fn set_region(&mut self, scope: Scope, region: Region) {
        settings::set_region(self, scope, region);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === EDGE BODY API ===

    /// Create the edge body at the right edge if it does not exist yet.
    pub fn show_edge(&mut self) -> bool {
        edge::show_edge(self)
    }

    pub fn hide_edge(&mut self) -> bool {
        edge::hide_edge(self)
    }

    pub fn edge_body(&self) -> Option<&EdgeBody> {
        self.edge.as_ref()
    }

    pub fn edge_state(&self) -> Option<EdgeState> {
        self.edge.as_ref().map(EdgeBody::state)
    }

    /// Route a pointer or menu signal to the edge body.
    pub fn edge_input(&mut self, input: EdgeInput) -> Vec<EdgeEffect> {
        edge::edge_input(self, input)
    }

    pub fn drag_start(&mut self, point: Vec2) -> Vec<EdgeEffect> {
        self.edge_input(EdgeInput::DragStart(point))
    }

    pub fn drag_to(&mut self, point: Vec2) -> Vec<EdgeEffect> {
        self.edge_input(EdgeInput::DragTo(point))
    }

    pub fn drag_end(&mut self) -> Vec<EdgeEffect> {
        self.edge_input(EdgeInput::DragEnd)
    }

    pub fn double_click(&mut self) -> Vec<EdgeEffect> {
        self.edge_input(EdgeInput::DoubleClick)
    }

    pub fn reset_edge(&mut self) -> Vec<EdgeEffect> {
        self.edge_input(EdgeInput::Reset)
    }

    // === SWARM API ===

    /// Spawn a fresh body at the swarm region center with a random velocity.
    pub fn spawn_body(&mut self) -> BodyId {
        commands::spawn_body(self)
    }

    /// Insert a caller-built body as is.
    pub fn insert_body(&mut self, body: Body) -> BodyId {
        commands::insert_body(self, body)
    }

    /// Split a mirrored child off `source`. `None` if the handle is stale.
    pub fn request_split(&mut self, source: BodyId) -> Option<BodyId> {
        commands::request_split(self, source)
    }

    /// Flip the pause flag; returns the new value, `None` for a stale handle.
    pub fn toggle_pause(&mut self, id: BodyId) -> Option<bool> {
        commands::toggle_pause(self, id)
    }

    pub fn remove_body(&mut self, id: BodyId) -> bool {
        commands::remove_body(self, id)
    }

    /// Remove every swarm body
    pub fn clear_swarm(&mut self) {
        commands::clear_swarm(self)
    }

    /// Send every body back to the region center with a fresh velocity.
    pub fn reset_swarm(&mut self) {
        commands::reset_swarm(self)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.swarm.get(id)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> + '_ {
        self.swarm.iter()
    }

    pub fn body_count(&self) -> usize {
        self.swarm.len()
    }

    // === STEPPING ===

    /// Advance one tick at the configured frame rate.
    pub fn tick(&mut self) -> TickReport {
        let dt = self.params.dt();
        step::step(self, dt)
    }

    /// Advance one tick with an explicit timestep.
    pub fn tick_with_dt(&mut self, dt: f64) -> TickReport {
        step::step(self, dt)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
