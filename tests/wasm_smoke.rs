#![cfg(target_arch = "wasm32")]

use deskpet_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn world_ticks_in_the_browser() {
    deskpet_engine::init();
    let mut world = World::new(0.0, 0.0, 800.0, 600.0, 1);
    let id = world.spawn_body();
    world.show_edge();
    world.step();

    assert_eq!(world.frame(), 1);
    assert_eq!(world.body_ids(), vec![id]);
    assert_eq!(world.edge_state(), 0);
    assert!(world.set_params_json("{\"frameRate\": 75}".to_string()).is_err());
}
