use crate::systems::swarm::{Body, BodyId};

use super::PetWorldCore;

pub(super) fn spawn_body(world: &mut PetWorldCore) -> BodyId {
    let body = world
        .reflector
        .initial(&world.regions.swarm, world.tuning.swarm_body_size, &mut world.rng);
    insert_body(world, body)
}

pub(super) fn insert_body(world: &mut PetWorldCore, body: Body) -> BodyId {
    let id = world.swarm.insert(body);
    log::debug!("swarm body {:?} spawned at {:?}", id, body.center);
    id
}

pub(super) fn request_split(world: &mut PetWorldCore, source: BodyId) -> Option<BodyId> {
    let Some(parent) = world.swarm.get(source).copied() else {
        log::warn!("split requested for unknown body {:?}", source);
        return None;
    };
    let child = world
        .reflector
        .split(&parent, &world.regions.swarm, &mut world.rng);
    Some(insert_body(world, child))
}

pub(super) fn toggle_pause(world: &mut PetWorldCore, id: BodyId) -> Option<bool> {
    let body = world.swarm.get_mut(id)?;
    Some(body.toggle_pause())
}

pub(super) fn remove_body(world: &mut PetWorldCore, id: BodyId) -> bool {
    let removed = world.swarm.remove(id).is_some();
    if removed {
        log::debug!("swarm body {:?} removed", id);
    }
    removed
}

pub(super) fn clear_swarm(world: &mut PetWorldCore) {
    world.swarm.clear();
}

pub(super) fn reset_swarm(world: &mut PetWorldCore) {
    let center = world.regions.swarm.center();
    for (_, body) in world.swarm.iter_mut() {
        body.center = center;
        body.velocity = world.reflector.random_velocity(&mut world.rng);
    }
}
