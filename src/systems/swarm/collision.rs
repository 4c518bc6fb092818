use std::f64::consts::TAU;

use rand::Rng;

use crate::core::Vec2;

use super::body::Body;
use super::walls::floor_component;

/// Body-body response knobs
#[derive(Clone, Copy, Debug)]
pub(super) struct PairRule {
    pub restitution: f64,
    pub coincident_epsilon: f64,
    pub min_component_speed: f64,
}

/// Resolve one overlapping pair in place.
///
/// Returns false (and leaves both bodies alone) when they do not overlap.
pub(super) fn resolve_pair<R: Rng + ?Sized>(
    a: &mut Body,
    b: &mut Body,
    rule: PairRule,
    rng: &mut R,
) -> bool {
    let delta = b.center - a.center;
    let d = delta.length();
    let min_dist = a.radius() + b.radius();
    if d >= min_dist {
        return false;
    }

    // Coincident centers have no usable normal: take a random one and push the
    // pair the full `min_dist` apart instead of treating `d` as `min_dist`.
    let n = if d < rule.coincident_epsilon {
        Vec2::from_angle(rng.gen_range(0.0..TAU))
    } else {
        delta * (1.0 / d)
    };

    // === Positional correction: split the overlap evenly ===
    let half = (min_dist - d) * 0.5;
    a.center -= n * half;
    b.center += n * half;

    // === Velocity response along the normal (equal masses) ===
    let u1 = a.velocity.dot(n);
    let u2 = b.velocity.dot(n);
    let t1 = a.velocity - n * u1;
    let t2 = b.velocity - n * u2;

    let e = rule.restitution;
    let v1n = (u1 + u2 - e * (u1 - u2)) * 0.5;
    let v2n = (u1 + u2 + e * (u1 - u2)) * 0.5;

    a.velocity = t1 + n * v1n;
    b.velocity = t2 + n * v2n;

    for body in [a, b] {
        body.velocity.x = floor_component(body.velocity.x, rule.min_component_speed);
        body.velocity.y = floor_component(body.velocity.y, rule.min_component_speed);
    }
    true
}

/// Two distinct mutable elements of one slice (`i < j`)
pub(super) fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const ELASTIC: PairRule = PairRule {
        restitution: 1.0,
        coincident_epsilon: 1e-4,
        min_component_speed: 80.0,
    };

    #[test]
    fn head_on_elastic_pair_swaps_normal_components() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut a = Body::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0), 20.0);
        let mut b = Body::new(Vec2::new(130.0, 100.0), Vec2::new(-150.0, -100.0), 20.0);

        assert!(resolve_pair(&mut a, &mut b, ELASTIC, &mut rng));

        assert_relative_eq!(a.velocity.x, -150.0, epsilon = 1e-9);
        assert_relative_eq!(b.velocity.x, 200.0, epsilon = 1e-9);
        // Tangential components are untouched.
        assert_relative_eq!(a.velocity.y, 100.0, epsilon = 1e-9);
        assert_relative_eq!(b.velocity.y, -100.0, epsilon = 1e-9);
        // Overlap of 10 split evenly.
        assert_relative_eq!(a.center.x, 95.0, epsilon = 1e-9);
        assert_relative_eq!(b.center.x, 135.0, epsilon = 1e-9);
    }

    #[test]
    fn inelastic_pair_moves_together_then_floors() {
        let mut rng = SmallRng::seed_from_u64(1);
        let rule = PairRule { restitution: 0.0, ..ELASTIC };
        let mut a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(300.0, 90.0), 20.0);
        let mut b = Body::new(Vec2::new(30.0, 0.0), Vec2::new(-100.0, 90.0), 20.0);

        resolve_pair(&mut a, &mut b, rule, &mut rng);

        // Shared normal speed (300 - 100) / 2 = 100.
        assert_relative_eq!(a.velocity.x, 100.0, epsilon = 1e-9);
        assert_relative_eq!(b.velocity.x, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn separated_pair_is_ignored() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut a = Body::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0), 20.0);
        let mut b = Body::new(Vec2::new(40.0, 0.0), Vec2::new(-100.0, 100.0), 20.0);
        assert!(!resolve_pair(&mut a, &mut b, ELASTIC, &mut rng));
        assert_eq!(a.velocity, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn coincident_pair_is_pushed_fully_apart() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut a = Body::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0), 20.0);
        let mut b = Body::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0), 20.0);

        assert!(resolve_pair(&mut a, &mut b, ELASTIC, &mut rng));

        assert_relative_eq!(a.center.distance(b.center), 40.0, epsilon = 1e-9);
        assert!(a.velocity.x.abs() >= 80.0 && a.velocity.y.abs() >= 80.0);
        assert!(b.velocity.x.abs() >= 80.0 && b.velocity.y.abs() >= 80.0);
    }

    #[test]
    fn pair_mut_returns_requested_elements() {
        let mut bodies = vec![
            Body::new(Vec2::new(0.0, 0.0), Vec2::zero(), 1.0),
            Body::new(Vec2::new(1.0, 0.0), Vec2::zero(), 1.0),
            Body::new(Vec2::new(2.0, 0.0), Vec2::zero(), 1.0),
        ];
        let (a, b) = pair_mut(&mut bodies, 0, 2);
        assert_eq!(a.center.x, 0.0);
        assert_eq!(b.center.x, 2.0);
    }
}
