use crate::core::{BoundsProvider, Region, RegionSnapshot, Scope};
use crate::domain::{ConfigError, PhysicsParams};

use super::perf_stats::PerfStats;
use super::PetWorldCore;

pub(super) fn enable_perf_metrics(world: &mut PetWorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &PetWorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_params(world: &mut PetWorldCore, params: PhysicsParams) {
    let params = params.sanitized();
    if params.frame_rate != world.params.frame_rate {
        log::debug!("frame rate -> {} Hz", params.frame_rate.hz());
    }
    world.params = params;
}

pub(super) fn load_params_json(world: &mut PetWorldCore, json: &str) -> Result<(), ConfigError> {
    let params = PhysicsParams::from_json(json)?;
    set_params(world, params);
    Ok(())
}

pub(super) fn refresh_regions(world: &mut PetWorldCore, provider: &dyn BoundsProvider) {
    let snapshot = RegionSnapshot::capture(provider);
    set_region(world, Scope::Edge, snapshot.edge);
    set_region(world, Scope::Swarm, snapshot.swarm);
}

/// Non-finite regions are dropped and the previous one stays in effect.
pub(super) fn set_region(world: &mut PetWorldCore, scope: Scope, region: Region) {
    if !region.is_finite() {
        log::warn!("ignoring non-finite {:?} region {:?}", scope, region);
        return;
    }
    match scope {
        Scope::Edge => world.regions.edge = region,
        Scope::Swarm => world.regions.swarm = region,
    }
}
