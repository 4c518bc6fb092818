use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Region;
use crate::domain::{PhysicsParams, Tuning};

use super::arena::{BodyArena, BodyId};
use super::body::Body;
use super::collision::{pair_mut, resolve_pair, PairRule};
use super::walls::{contain, WallRule};

/// What a body ran into this tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImpactKind {
    Wall,
    Body,
}

/// Signals the driver to react (visual swap) for one body.
///
/// At most one event per body per kind per tick, wall before body, in
/// ascending body order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImpactEvent<Id = BodyId> {
    pub body: Id,
    pub kind: ImpactKind,
}

/// Counters from the last tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SwarmStats {
    pub bodies_simulated: u32,
    pub pairs_tested: u32,
    pub wall_hits: u32,
    pub body_hits: u32,
}

#[derive(Clone, Copy, Default)]
struct ImpactFlags {
    wall: bool,
    body: bool,
}

/// Fixed-step integrator + elastic collision resolver for the swarm
pub struct SwarmSimulator {
    wall_rule: WallRule,
    coincident_epsilon: f64,
    ids: Vec<BodyId>,
    working: Vec<Body>,
    flags: Vec<ImpactFlags>,
    stats: SwarmStats,
}

impl SwarmSimulator {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wall_rule: WallRule {
                epsilon: tuning.wall_epsilon,
                min_component_speed: tuning.min_component_speed,
            },
            coincident_epsilon: tuning.coincident_epsilon,
            ids: Vec::new(),
            working: Vec::new(),
            flags: Vec::new(),
            stats: SwarmStats::default(),
        }
    }

    pub fn last_stats(&self) -> SwarmStats {
        self.stats
    }

    /// Advance every live body in the arena by `dt`.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        arena: &mut BodyArena,
        region: &Region,
        params: &PhysicsParams,
        rng: &mut R,
    ) -> Vec<ImpactEvent> {
        let mut ids = std::mem::take(&mut self.ids);
        let mut working = std::mem::take(&mut self.working);
        arena.gather(&mut ids, &mut working);

        let events = self
            .step_bodies(dt, &mut working, region, params, rng)
            .into_iter()
            .map(|e| ImpactEvent { body: ids[e.body], kind: e.kind })
            .collect();

        arena.scatter(&ids, &working);
        self.ids = ids;
        self.working = working;
        events
    }

    /// Advance a dense working set by `dt`. Events carry slice indices.
    ///
    /// Order per tick:
    /// 1. gravity + integration + wall bounce (unpaused bodies)
    /// 2. one pass over pairs `i < j` resolving overlaps
    /// 3. wall re-clamp for anything step 2 pushed out
    pub fn step_bodies<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        bodies: &mut [Body],
        region: &Region,
        params: &PhysicsParams,
        rng: &mut R,
    ) -> Vec<ImpactEvent<usize>> {
        let n = bodies.len();
        self.stats = SwarmStats::default();
        self.flags.clear();
        self.flags.resize(n, ImpactFlags::default());

        let gravity = params.gravity_swarm;
        let rule = self.wall_rule;

        // === 1. INTEGRATION + WALLS ===
        let integrate = move |body: &mut Body, flags: &mut ImpactFlags| {
            if body.paused {
                return;
            }
            if gravity != 0.0 {
                body.velocity.y -= gravity * dt;
            }
            body.center += body.velocity * dt;
            if contain(body, region, rule) {
                flags.wall = true;
            }
        };

        #[cfg(feature = "parallel")]
        bodies
            .par_iter_mut()
            .zip(self.flags.par_iter_mut())
            .for_each(|(body, flags)| integrate(body, flags));

        #[cfg(not(feature = "parallel"))]
        bodies
            .iter_mut()
            .zip(self.flags.iter_mut())
            .for_each(|(body, flags)| integrate(body, flags));

        // === 2. PAIRWISE COLLISIONS ===
        let pair_rule = PairRule {
            restitution: params.restitution_swarm.clamp(0.0, 1.0),
            coincident_epsilon: self.coincident_epsilon,
            min_component_speed: rule.min_component_speed,
        };
        for i in 0..n {
            if bodies[i].paused {
                continue;
            }
            for j in (i + 1)..n {
                if bodies[j].paused {
                    continue;
                }
                self.stats.pairs_tested += 1;
                let (a, b) = pair_mut(bodies, i, j);
                if resolve_pair(a, b, pair_rule, rng) {
                    self.flags[i].body = true;
                    self.flags[j].body = true;
                }
            }
        }

        // === 3. RE-CLAMP ===
        let reclamp = move |body: &mut Body, flags: &mut ImpactFlags| {
            if !body.paused && contain(body, region, rule) {
                flags.wall = true;
            }
        };

        #[cfg(feature = "parallel")]
        bodies
            .par_iter_mut()
            .zip(self.flags.par_iter_mut())
            .for_each(|(body, flags)| reclamp(body, flags));

        #[cfg(not(feature = "parallel"))]
        bodies
            .iter_mut()
            .zip(self.flags.iter_mut())
            .for_each(|(body, flags)| reclamp(body, flags));

        // === 4. EVENTS ===
        let mut events = Vec::new();
        for (index, (body, flags)) in bodies.iter().zip(&self.flags).enumerate() {
            if !body.paused {
                self.stats.bodies_simulated += 1;
            }
            if flags.wall {
                self.stats.wall_hits += 1;
                events.push(ImpactEvent { body: index, kind: ImpactKind::Wall });
            }
            if flags.body {
                self.stats.body_hits += 1;
                events.push(ImpactEvent { body: index, kind: ImpactKind::Body });
            }
        }

        if !events.is_empty() {
            log::trace!(
                "swarm tick: {} bodies, {} wall hits, {} body hits",
                self.stats.bodies_simulated,
                self.stats.wall_hits,
                self.stats.body_hits
            );
        }
        events
    }
}
