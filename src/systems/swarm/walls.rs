use crate::core::Region;

use super::body::Body;

/// Wall response knobs shared by the integration pass and the re-clamp pass
#[derive(Clone, Copy, Debug)]
pub(super) struct WallRule {
    pub epsilon: f64,
    pub min_component_speed: f64,
}

/// Lift a velocity component to at least `floor` in magnitude, keeping its sign.
#[inline]
pub(super) fn floor_component(v: f64, floor: f64) -> f64 {
    v.abs().max(floor).copysign(v)
}

/// Clamp a body back inside `region`, bouncing the offending axis inward.
///
/// Returns true when any wall was touched this call.
pub(super) fn contain(body: &mut Body, region: &Region, rule: WallRule) -> bool {
    let r = body.radius();
    let hit_x = contain_axis(
        &mut body.center.x,
        &mut body.velocity.x,
        r,
        region.min_x(),
        region.max_x(),
        rule,
    );
    let hit_y = contain_axis(
        &mut body.center.y,
        &mut body.velocity.y,
        r,
        region.min_y(),
        region.max_y(),
        rule,
    );
    hit_x || hit_y
}

fn contain_axis(pos: &mut f64, vel: &mut f64, r: f64, min: f64, max: f64, rule: WallRule) -> bool {
    let low_hit = *pos - r <= min;
    let high_hit = *pos + r >= max;
    if !low_hit && !high_hit {
        return false;
    }

    let lo = min + r + rule.epsilon;
    let hi = max - r - rule.epsilon;
    let speed = vel.abs().max(rule.min_component_speed);

    if lo > hi {
        // Region too small to hold the body: park it on the midpoint and keep it reversing.
        *pos = (min + max) * 0.5;
        *vel = -speed.copysign(*vel);
    } else if low_hit {
        *pos = lo;
        *vel = speed;
    } else {
        *pos = hi;
        *vel = -speed;
    }
    true
}
