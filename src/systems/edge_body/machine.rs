use rand::Rng;

use crate::core::{Region, Vec2};
use crate::domain::{PhysicsParams, Tuning};

use super::placement::{clamp_footprint, distance_to_right_edge, random_right_edge, right_edge_x};
use super::state::{next_state, EdgeEffect, EdgeInput, EdgeState};

/// The single gravity-bound body
#[derive(Clone, Debug)]
pub struct EdgeBody {
    // === Physics State ===
    /// Bottom-left corner of the footprint
    pub position: Vec2,
    /// Downward speed while falling (negative while rising after a bounce)
    pub fall_velocity: f64,
    state: EdgeState,

    // === Shape / interaction ===
    size: Vec2,
    /// Pointer position relative to `position` at drag start
    drag_offset: Vec2,
    snap_threshold: f64,
    min_bounce_speed: f64,
}

impl EdgeBody {
    pub fn new(position: Vec2, tuning: &Tuning) -> Self {
        Self {
            position,
            fall_velocity: 0.0,
            state: EdgeState::Idle,
            size: Vec2::new(tuning.edge_body_width, tuning.edge_body_height),
            drag_offset: Vec2::zero(),
            snap_threshold: tuning.snap_threshold,
            min_bounce_speed: tuning.min_bounce_speed,
        }
    }

    /// Idle body flush with the right edge at a random height
    pub fn placed<R: Rng + ?Sized>(region: &Region, tuning: &Tuning, rng: &mut R) -> Self {
        let mut body = Self::new(Vec2::zero(), tuning);
        body.position = random_right_edge(region, body.size, rng);
        body
    }

    #[inline]
    pub fn state(&self) -> EdgeState {
        self.state
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn distance_to_right_edge(&self, region: &Region) -> f64 {
        distance_to_right_edge(region, self.position, self.size)
    }

    /// Feed one driver signal through the state machine.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        input: EdgeInput,
        region: &Region,
        rng: &mut R,
    ) -> Vec<EdgeEffect> {
        let near = self.distance_to_right_edge(region) <= self.snap_threshold;
        let Some(next) = next_state(self.state, &input, near) else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        match input {
            EdgeInput::DragStart(pointer) => {
                self.drag_offset = pointer - self.position;
                self.fall_velocity = 0.0;
            }
            EdgeInput::DragTo(pointer) => {
                self.position = clamp_footprint(region, self.size, pointer - self.drag_offset);
            }
            EdgeInput::DragEnd => {
                self.fall_velocity = 0.0;
                if next == EdgeState::Idle {
                    self.position.x = right_edge_x(region, self.size);
                    effects.push(EdgeEffect::Repositioned { position: self.position });
                }
            }
            EdgeInput::DoubleClick | EdgeInput::Reset => {
                self.fall_velocity = 0.0;
                self.position = random_right_edge(region, self.size, rng);
                effects.push(EdgeEffect::Repositioned { position: self.position });
                log::debug!("edge body re-placed at {:?}", self.position);
            }
        }

        self.enter(next, &mut effects);
        effects
    }

    /// Advance a falling body by `dt` against the floor of `region`.
    pub fn step(&mut self, dt: f64, region: &Region, params: &PhysicsParams) -> Vec<EdgeEffect> {
        if self.state != EdgeState::Falling {
            return Vec::new();
        }

        let mut effects = Vec::new();
        self.fall_velocity += params.gravity_edge * dt;
        self.position.y -= self.fall_velocity * dt;

        let floor = region.min_y();
        if self.position.y > floor {
            return effects;
        }
        self.position.y = floor;

        let restitution = params.restitution_edge.clamp(0.0, 1.0);
        if restitution > 0.0 {
            self.fall_velocity = -self.fall_velocity * restitution;
            let speed = self.fall_velocity.abs();
            if speed >= self.min_bounce_speed {
                effects.push(EdgeEffect::Bounced { speed });
                return effects;
            }
        }

        self.fall_velocity = 0.0;
        effects.push(EdgeEffect::Landed { position: self.position });
        self.enter(EdgeState::Landed, &mut effects);
        effects
    }

    fn enter(&mut self, next: EdgeState, effects: &mut Vec<EdgeEffect>) {
        if next == self.state {
            return;
        }
        log::debug!("edge body state: {:?} -> {:?}", self.state, next);
        effects.push(EdgeEffect::StateChanged { from: self.state, to: next });
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn region() -> Region {
        Region::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn falling_at(y: f64) -> EdgeBody {
        let mut body = EdgeBody::new(Vec2::new(300.0, y), &Tuning::default());
        body.state = EdgeState::Falling;
        body
    }

    #[test]
    fn drag_follows_pointer_keeping_grab_offset() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut body = EdgeBody::new(Vec2::new(850.0, 300.0), &Tuning::default());

        body.apply(EdgeInput::DragStart(Vec2::new(900.0, 350.0)), &region(), &mut rng);
        assert_eq!(body.state(), EdgeState::Dragging);

        body.apply(EdgeInput::DragTo(Vec2::new(500.0, 450.0)), &region(), &mut rng);
        assert_eq!(body.position, Vec2::new(450.0, 400.0));

        // Pointer far outside: footprint stays on screen.
        body.apply(EdgeInput::DragTo(Vec2::new(5000.0, -100.0)), &region(), &mut rng);
        assert_eq!(body.position, Vec2::new(850.0, 0.0));
    }

    #[test]
    fn release_near_right_edge_snaps_to_idle() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut body = EdgeBody::new(Vec2::new(790.0, 300.0), &Tuning::default());
        body.apply(EdgeInput::DragStart(Vec2::new(800.0, 310.0)), &region(), &mut rng);

        // Right side at 940: 60 units from the edge.
        let effects = body.apply(EdgeInput::DragEnd, &region(), &mut rng);

        assert_eq!(body.state(), EdgeState::Idle);
        assert_eq!(body.position.x, 850.0);
        assert_eq!(body.position.y, 300.0);
        assert!(effects.contains(&EdgeEffect::StateChanged {
            from: EdgeState::Dragging,
            to: EdgeState::Idle,
        }));
    }

    #[test]
    fn release_far_from_edge_starts_fall_from_rest() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut body = EdgeBody::new(Vec2::new(200.0, 300.0), &Tuning::default());
        body.apply(EdgeInput::DragStart(Vec2::new(210.0, 310.0)), &region(), &mut rng);
        body.apply(EdgeInput::DragEnd, &region(), &mut rng);

        assert_eq!(body.state(), EdgeState::Falling);
        assert_eq!(body.fall_velocity, 0.0);
    }

    #[test]
    fn fall_integrates_velocity_then_position() {
        let mut body = falling_at(500.0);
        let params = PhysicsParams::default();
        let effects = body.step(0.1, &region(), &params);

        assert!(effects.is_empty());
        assert_relative_eq!(body.fall_velocity, 50.0);
        assert_relative_eq!(body.position.y, 495.0);
    }

    #[test]
    fn inelastic_floor_contact_lands_immediately() {
        let mut body = falling_at(1.0);
        body.fall_velocity = 300.0;
        let params = PhysicsParams::default();

        let effects = body.step(1.0 / 60.0, &region(), &params);

        assert_eq!(body.state(), EdgeState::Landed);
        assert_eq!(body.position.y, 0.0);
        assert_eq!(body.fall_velocity, 0.0);
        assert!(matches!(effects[0], EdgeEffect::Landed { .. }));
    }

    #[test]
    fn fast_bounce_keeps_falling_upward() {
        let mut body = falling_at(1.0);
        body.fall_velocity = 400.0;
        let params = PhysicsParams { restitution_edge: 0.5, ..PhysicsParams::default() };

        let effects = body.step(1.0 / 60.0, &region(), &params);

        assert_eq!(body.state(), EdgeState::Falling);
        assert!(body.fall_velocity < 0.0);
        assert!(matches!(effects[0], EdgeEffect::Bounced { .. }));
    }

    #[test]
    fn slow_bounce_settles() {
        let mut body = falling_at(0.5);
        body.fall_velocity = 150.0;
        let params = PhysicsParams { restitution_edge: 0.5, ..PhysicsParams::default() };

        body.step(1.0 / 60.0, &region(), &params);

        assert_eq!(body.state(), EdgeState::Landed);
    }

    #[test]
    fn double_click_on_landed_replaces_at_right_edge() {
        let mut rng = SmallRng::seed_from_u64(4);
        let mut body = falling_at(0.0);
        body.step(1.0 / 60.0, &region(), &PhysicsParams::default());
        assert_eq!(body.state(), EdgeState::Landed);

        assert!(body
            .apply(EdgeInput::DragStart(Vec2::new(310.0, 10.0)), &region(), &mut rng)
            .is_empty());

        body.apply(EdgeInput::DoubleClick, &region(), &mut rng);
        assert_eq!(body.state(), EdgeState::Idle);
        assert_eq!(body.position.x, 850.0);
        assert!(body.position.y >= 0.0 && body.position.y <= 600.0);
    }

    #[test]
    fn idle_body_does_not_move_on_step() {
        let mut body = EdgeBody::new(Vec2::new(850.0, 300.0), &Tuning::default());
        assert!(body.step(1.0, &region(), &PhysicsParams::default()).is_empty());
        assert_eq!(body.position, Vec2::new(850.0, 300.0));
    }
}
