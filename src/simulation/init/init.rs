use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::core::{Region, RegionSnapshot};
use crate::domain::{PhysicsParams, Tuning};
use crate::systems::swarm::{BodyArena, SpawnReflector, SwarmSimulator};

use super::perf_stats::PerfStats;
use super::PetWorldCore;

pub(super) fn create_world_core(region: Region, tuning: Tuning, seed: u64) -> PetWorldCore {
    PetWorldCore {
        params: PhysicsParams::default(),
        regions: RegionSnapshot { edge: region, swarm: region },
        edge: None,
        swarm: BodyArena::new(),
        simulator: SwarmSimulator::new(&tuning),
        reflector: SpawnReflector::new(&tuning),
        tuning,
        rng: SmallRng::seed_from_u64(seed),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
