use super::{PerfTimer, PetWorldCore, TickReport};

/// One tick: edge body first, then the swarm. Both read the regions and
/// parameters as they stood when the tick began.
pub(super) fn step(world: &mut PetWorldCore, dt: f64) -> TickReport {
    if !(dt.is_finite() && dt > 0.0) {
        log::warn!("skipping tick with invalid dt {}", dt);
        return TickReport::default();
    }

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let regions = world.regions;
    let params = world.params;

    // === EDGE BODY ===
    let edge = match world.edge.as_mut() {
        Some(body) if perf_on => {
            let (effects, ms) = PerfTimer::time(|| body.step(dt, &regions.edge, &params));
            world.perf_stats.edge_ms = ms;
            effects
        }
        Some(body) => body.step(dt, &regions.edge, &params),
        None => Vec::new(),
    };

    // === SWARM ===
    let simulator = &mut world.simulator;
    let swarm = &mut world.swarm;
    let rng = &mut world.rng;
    let impacts = if perf_on {
        let (impacts, ms) =
            PerfTimer::time(|| simulator.step(dt, swarm, &regions.swarm, &params, rng));
        world.perf_stats.swarm_ms = ms;
        impacts
    } else {
        simulator.step(dt, swarm, &regions.swarm, &params, rng)
    };

    world.frame += 1;

    if let Some(t0) = step_start {
        world.perf_stats.record_swarm(world.simulator.last_stats());
        world.perf_stats.step_ms = t0.elapsed_ms();
    }

    TickReport { edge, impacts }
}
