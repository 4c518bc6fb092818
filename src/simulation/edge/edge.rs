use crate::systems::edge_body::{EdgeBody, EdgeEffect, EdgeInput};

use super::PetWorldCore;

pub(super) fn show_edge(world: &mut PetWorldCore) -> bool {
    if world.edge.is_some() {
        return false;
    }
    let body = EdgeBody::placed(&world.regions.edge, &world.tuning, &mut world.rng);
    log::debug!("edge body shown at {:?}", body.position);
    world.edge = Some(body);
    true
}

pub(super) fn hide_edge(world: &mut PetWorldCore) -> bool {
    world.edge.take().is_some()
}

pub(super) fn edge_input(world: &mut PetWorldCore, input: EdgeInput) -> Vec<EdgeEffect> {
    match world.edge.as_mut() {
        Some(body) => body.apply(input, &world.regions.edge, &mut world.rng),
        None => Vec::new(),
    }
}
