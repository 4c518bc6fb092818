use super::*;
use crate::core::FixedBounds;
use crate::domain::FrameRate;
use crate::systems::swarm::ImpactKind;

fn region() -> Region {
    Region::new(0.0, 0.0, 1000.0, 800.0)
}

#[test]
fn fresh_world_has_defaults_and_no_bodies() {
    let world = PetWorldCore::new(region(), 1);
    assert_eq!(world.frame(), 0);
    assert_eq!(*world.params(), PhysicsParams::default());
    assert_eq!(world.body_count(), 0);
    assert!(world.edge_state().is_none());
}

#[test]
fn tick_advances_frame_and_uses_configured_rate() {
    let mut world = PetWorldCore::new(region(), 1);
    world.set_params(PhysicsParams { frame_rate: FrameRate::Fps30, ..PhysicsParams::default() });

    let id = world.insert_body(Body::new(Vec2::new(500.0, 400.0), Vec2::new(90.0, 120.0), 70.0));
    world.tick();

    assert_eq!(world.frame(), 1);
    let body = world.body(id).copied().unwrap();
    assert!((body.center.x - 503.0).abs() < 1e-9);
    assert!((body.center.y - 404.0).abs() < 1e-9);
}

#[test]
fn invalid_dt_is_ignored() {
    let mut world = PetWorldCore::new(region(), 1);
    world.spawn_body();
    let report = world.tick_with_dt(f64::NAN);
    assert_eq!(report, TickReport::default());
    assert_eq!(world.frame(), 0);
}

#[test]
fn show_edge_places_body_flush_right() {
    let mut world = PetWorldCore::new(region(), 7);
    assert!(world.show_edge());
    assert!(!world.show_edge());

    let body = world.edge_body().unwrap();
    assert_eq!(body.state(), EdgeState::Idle);
    assert_eq!(body.position.x, 850.0);
    assert!(body.position.y >= 0.0 && body.position.y <= 600.0);

    assert!(world.hide_edge());
    assert!(world.edge_input(EdgeInput::DoubleClick).is_empty());
}

#[test]
fn dropped_edge_body_lands_on_floor() {
    let mut world = PetWorldCore::new(region(), 7);
    world.show_edge();
    let start = world.edge_body().unwrap().position;

    world.drag_start(start + Vec2::new(10.0, 10.0));
    world.drag_to(Vec2::new(410.0, 510.0));
    world.drag_end();
    assert_eq!(world.edge_state(), Some(EdgeState::Falling));

    let mut landed = false;
    for _ in 0..600 {
        let report = world.tick();
        if report.edge.iter().any(|e| matches!(e, EdgeEffect::Landed { .. })) {
            landed = true;
            break;
        }
    }
    assert!(landed);
    assert_eq!(world.edge_state(), Some(EdgeState::Landed));
    assert_eq!(world.edge_body().unwrap().position.y, 0.0);

    world.double_click();
    assert_eq!(world.edge_state(), Some(EdgeState::Idle));
}

#[test]
fn split_spawns_mirrored_child() {
    let mut world = PetWorldCore::new(region(), 3);
    let parent = world.insert_body(Body::new(Vec2::new(500.0, 400.0), Vec2::new(200.0, 0.0), 70.0));

    let child = world.request_split(parent).unwrap();

    assert_eq!(world.body_count(), 2);
    let child = world.body(child).copied().unwrap();
    assert!((child.center.x - 423.0).abs() < 1e-9);
    assert!((child.velocity.x + 200.0).abs() < 1e-9);
}

#[test]
fn spawned_body_is_sized_from_tuning() {
    let tuning = Tuning { swarm_body_size: 100.0, ..Tuning::default() };
    let mut world = PetWorldCore::with_tuning(region(), tuning, 3);
    let id = world.spawn_body();
    let body = world.body(id).copied().unwrap();
    assert_eq!(body.radius(), 50.0);
    assert_eq!(body.center, Vec2::new(500.0, 400.0));
}

#[test]
fn stale_handles_are_rejected() {
    let mut world = PetWorldCore::new(region(), 3);
    let id = world.spawn_body();
    assert!(world.remove_body(id));
    assert!(!world.remove_body(id));
    assert!(world.request_split(id).is_none());
    assert!(world.toggle_pause(id).is_none());
}

#[test]
fn paused_body_stays_put() {
    let mut world = PetWorldCore::new(region(), 3);
    let id = world.spawn_body();
    assert_eq!(world.toggle_pause(id), Some(true));
    let before = world.body(id).copied().unwrap();

    for _ in 0..10 {
        world.tick();
    }
    assert_eq!(world.body(id).copied().unwrap(), before);
    assert_eq!(world.toggle_pause(id), Some(false));
}

#[test]
fn reset_swarm_recenters_everything() {
    let mut world = PetWorldCore::new(region(), 3);
    for _ in 0..3 {
        world.spawn_body();
    }
    for _ in 0..30 {
        world.tick();
    }
    world.reset_swarm();
    assert!(world.bodies().all(|(_, b)| b.center == Vec2::new(500.0, 400.0)));

    world.clear_swarm();
    assert_eq!(world.body_count(), 0);
}

#[test]
fn wall_contact_is_reported_with_handle() {
    let mut world = PetWorldCore::new(region(), 3);
    let id = world.insert_body(Body::new(Vec2::new(929.5, 400.0), Vec2::new(120.0, 100.0), 70.0));

    let report = world.tick();

    assert_eq!(report.impacts, vec![ImpactEvent { body: id, kind: ImpactKind::Wall }]);
    let body = world.body(id).copied().unwrap();
    assert_eq!(body.center.x, 929.0);
    assert_eq!(body.velocity.x, -120.0);
}

#[test]
fn refresh_regions_keeps_previous_region_when_non_finite() {
    let mut world = PetWorldCore::new(region(), 3);
    let swarm = Region::new(0.0, 0.0, 1920.0, 1080.0);
    world.refresh_regions(&FixedBounds::new(Region::new(0.0, 0.0, f64::INFINITY, 10.0), swarm));

    assert_eq!(world.region(Scope::Edge), region());
    assert_eq!(world.region(Scope::Swarm), swarm);
}

#[test]
fn params_json_round_trip_and_rejection() {
    let mut world = PetWorldCore::new(region(), 3);
    world
        .load_params_json(r#"{"gravityEdge": 900, "restitutionEdge": 0.4, "frameRate": 120}"#)
        .unwrap();
    assert_eq!(world.params().gravity_edge, 900.0);
    assert_eq!(world.params().frame_rate, FrameRate::Fps120);

    assert!(matches!(
        world.load_params_json(r#"{"frameRate": 75}"#),
        Err(ConfigError::Parse(_))
    ));
    assert_eq!(world.params().frame_rate, FrameRate::Fps120);
}

#[test]
fn perf_stats_are_zero_until_enabled() {
    let mut world = PetWorldCore::new(region(), 3);
    world.spawn_body();
    world.spawn_body();
    world.tick();
    assert_eq!(world.get_perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.tick();
    let stats = world.get_perf_stats();
    assert_eq!(stats.bodies_simulated(), 2);
    assert_eq!(stats.pairs_tested(), 1);
    assert!(stats.step_ms() >= 0.0);
}
