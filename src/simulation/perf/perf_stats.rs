use wasm_bindgen::prelude::*;

use crate::systems::swarm::SwarmStats;

/// Last tick timings and counters
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) edge_ms: f64,
    pub(super) swarm_ms: f64,
    pub(super) bodies_simulated: u32,
    pub(super) pairs_tested: u32,
    pub(super) wall_hits: u32,
    pub(super) body_hits: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_swarm(&mut self, stats: SwarmStats) {
        self.bodies_simulated = stats.bodies_simulated;
        self.pairs_tested = stats.pairs_tested;
        self.wall_hits = stats.wall_hits;
        self.body_hits = stats.body_hits;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn edge_ms(&self) -> f64 { self.edge_ms }
    #[wasm_bindgen(getter)]
    pub fn swarm_ms(&self) -> f64 { self.swarm_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies_simulated(&self) -> u32 { self.bodies_simulated }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn body_hits(&self) -> u32 { self.body_hits }
}
