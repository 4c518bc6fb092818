use wasm_bindgen::prelude::*;

use crate::core::{Region, Scope, Vec2};
use crate::systems::edge_body::EdgeEffect;
use crate::systems::swarm::{BodyId, ImpactKind};

use super::perf_stats::PerfStats;
use super::{PetWorldCore, TickReport};

fn scope_from_code(code: u8) -> Result<Scope, JsValue> {
    match code {
        0 => Ok(Scope::Edge),
        1 => Ok(Scope::Swarm),
        other => Err(JsValue::from_str(&format!("unknown region scope {other}"))),
    }
}

fn effect_code(effect: &EdgeEffect) -> u8 {
    match effect {
        EdgeEffect::StateChanged { .. } => 0,
        EdgeEffect::Repositioned { .. } => 1,
        EdgeEffect::Bounced { .. } => 2,
        EdgeEffect::Landed { .. } => 3,
    }
}

#[wasm_bindgen]
pub struct World {
    core: PetWorldCore,
    /// Effects and impacts from the last call that produced any
    last: TickReport,
}

#[wasm_bindgen]
impl World {
    /// Create a world with both regions set to the given rectangle (y-up)
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64, seed: u64) -> Self {
        Self {
            core: PetWorldCore::new(Region::new(min_x, min_y, max_x, max_y), seed),
            last: TickReport::default(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Scope 0 is the edge region, 1 the swarm region
    pub fn set_region(
        &mut self,
        scope: u8,
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    ) -> Result<(), JsValue> {
        let scope = scope_from_code(scope)?;
        self.core.set_region(scope, Region::new(min_x, min_y, max_x, max_y));
        Ok(())
    }

    pub fn set_params_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_params_json(&json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    pub fn get_params_json(&self) -> String {
        self.core.params().to_json()
    }

    /// Advance one tick at the configured frame rate
    pub fn step(&mut self) {
        self.last = self.core.tick();
    }

    pub fn step_dt(&mut self, dt: f64) {
        self.last = self.core.tick_with_dt(dt);
    }

    // === EDGE BODY API ===

    pub fn show_edge(&mut self) -> bool {
        self.core.show_edge()
    }

    pub fn hide_edge(&mut self) -> bool {
        self.core.hide_edge()
    }

    pub fn drag_start(&mut self, x: f64, y: f64) {
        self.record_edge(|core| core.drag_start(Vec2::new(x, y)));
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        self.record_edge(|core| core.drag_to(Vec2::new(x, y)));
    }

    pub fn drag_end(&mut self) {
        self.record_edge(PetWorldCore::drag_end);
    }

    pub fn double_click(&mut self) {
        self.record_edge(PetWorldCore::double_click);
    }

    pub fn reset_edge(&mut self) {
        self.record_edge(PetWorldCore::reset_edge);
    }

    /// 0 Idle, 1 Dragging, 2 Falling, 3 Landed, 255 when hidden
    pub fn edge_state(&self) -> u8 {
        self.core.edge_state().map_or(u8::MAX, |s| s.code())
    }

    pub fn edge_x(&self) -> f64 {
        self.core.edge_body().map_or(0.0, |b| b.position.x)
    }

    pub fn edge_y(&self) -> f64 {
        self.core.edge_body().map_or(0.0, |b| b.position.y)
    }

    pub fn edge_event_count(&self) -> usize {
        self.last.edge.len()
    }

    /// 0 StateChanged, 1 Repositioned, 2 Bounced, 3 Landed, 255 out of range
    pub fn edge_event_kind(&self, idx: usize) -> u8 {
        self.last.edge.get(idx).map_or(u8::MAX, effect_code)
    }

    // === SWARM API ===

    /// Returns the new body handle as opaque bits
    pub fn spawn_body(&mut self) -> u64 {
        self.core.spawn_body().to_bits()
    }

    pub fn request_split(&mut self, source: u64) -> Option<u64> {
        self.core
            .request_split(BodyId::from_bits(source))
            .map(BodyId::to_bits)
    }

    pub fn toggle_pause(&mut self, id: u64) -> Option<bool> {
        self.core.toggle_pause(BodyId::from_bits(id))
    }

    pub fn remove_body(&mut self, id: u64) -> bool {
        self.core.remove_body(BodyId::from_bits(id))
    }

    pub fn clear_swarm(&mut self) {
        self.core.clear_swarm();
    }

    pub fn reset_swarm(&mut self) {
        self.core.reset_swarm();
    }

    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    pub fn body_ids(&self) -> Vec<u64> {
        self.core.bodies().map(|(id, _)| id.to_bits()).collect()
    }

    /// Flat `[x0, y0, x1, y1, ..]` in the same order as `body_ids`
    pub fn body_centers(&self) -> Vec<f64> {
        self.core
            .bodies()
            .flat_map(|(_, b)| [b.center.x, b.center.y])
            .collect()
    }

    pub fn impact_count(&self) -> usize {
        self.last.impacts.len()
    }

    pub fn impact_body(&self, idx: usize) -> Option<u64> {
        self.last.impacts.get(idx).map(|e| e.body.to_bits())
    }

    /// 0 wall, 1 body, 255 out of range
    pub fn impact_kind(&self, idx: usize) -> u8 {
        self.last.impacts.get(idx).map_or(u8::MAX, |e| match e.kind {
            ImpactKind::Wall => 0,
            ImpactKind::Body => 1,
        })
    }
}

impl World {
    fn record_edge(&mut self, f: impl FnOnce(&mut PetWorldCore) -> Vec<EdgeEffect>) {
        self.last.edge = f(&mut self.core);
        self.last.impacts.clear();
    }
}
