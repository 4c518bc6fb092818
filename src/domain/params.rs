//! Physics parameters read by the engine each tick.
//!
//! `PhysicsParams` is a plain value: the driver owns the user's preferences and
//! pushes a fresh copy whenever one changes. Nothing here is observed or
//! broadcast; a change simply takes effect on the next tick.

use serde::{Deserialize, Serialize};

use super::constants::MAX_GRAVITY;
use super::error::ConfigError;

/// Tick rates the scheduler can run at
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum FrameRate {
    Fps30,
    Fps48,
    Fps50,
    Fps60,
    Fps120,
}

impl FrameRate {
    pub const ALL: [FrameRate; 5] = [
        FrameRate::Fps30,
        FrameRate::Fps48,
        FrameRate::Fps50,
        FrameRate::Fps60,
        FrameRate::Fps120,
    ];

    pub fn hz(self) -> u32 {
        match self {
            FrameRate::Fps30 => 30,
            FrameRate::Fps48 => 48,
            FrameRate::Fps50 => 50,
            FrameRate::Fps60 => 60,
            FrameRate::Fps120 => 120,
        }
    }

    /// Fixed timestep in seconds
    pub fn dt(self) -> f64 {
        1.0 / self.hz() as f64
    }
}

impl Default for FrameRate {
    fn default() -> Self {
        FrameRate::Fps60
    }
}

impl TryFrom<u32> for FrameRate {
    type Error = ConfigError;

    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        FrameRate::ALL
            .into_iter()
            .find(|rate| rate.hz() == hz)
            .ok_or(ConfigError::UnsupportedFrameRate(hz))
    }
}

impl From<FrameRate> for u32 {
    fn from(rate: FrameRate) -> Self {
        rate.hz()
    }
}

pub const DEFAULT_GRAVITY_EDGE: f64 = 500.0;
pub const DEFAULT_RESTITUTION_EDGE: f64 = 0.0;
pub const DEFAULT_GRAVITY_SWARM: f64 = 0.0;
pub const DEFAULT_RESTITUTION_SWARM: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsParams {
    /// Downward acceleration of the edge body (units/s²)
    pub gravity_edge: f64,
    /// Bounce coefficient of the edge body against the floor
    pub restitution_edge: f64,
    /// Downward acceleration applied to every swarm body
    pub gravity_swarm: f64,
    /// Coefficient used for body-body collisions in the swarm
    pub restitution_swarm: f64,
    pub frame_rate: FrameRate,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity_edge: DEFAULT_GRAVITY_EDGE,
            restitution_edge: DEFAULT_RESTITUTION_EDGE,
            gravity_swarm: DEFAULT_GRAVITY_SWARM,
            restitution_swarm: DEFAULT_RESTITUTION_SWARM,
            frame_rate: FrameRate::default(),
        }
    }
}

impl PhysicsParams {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: PhysicsParams = serde_json::from_str(json)?;
        Ok(params.sanitized())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Boundary clamp: restitution into [0,1], gravity into [0, MAX_GRAVITY],
    /// non-finite values replaced by the defaults.
    pub fn sanitized(self) -> Self {
        Self {
            gravity_edge: clamp_or(self.gravity_edge, 0.0, MAX_GRAVITY, DEFAULT_GRAVITY_EDGE),
            restitution_edge: clamp_or(self.restitution_edge, 0.0, 1.0, DEFAULT_RESTITUTION_EDGE),
            gravity_swarm: clamp_or(self.gravity_swarm, 0.0, MAX_GRAVITY, DEFAULT_GRAVITY_SWARM),
            restitution_swarm: clamp_or(
                self.restitution_swarm,
                0.0,
                1.0,
                DEFAULT_RESTITUTION_SWARM,
            ),
            frame_rate: self.frame_rate,
        }
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.frame_rate.dt()
    }
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_match_stock_preferences() {
        let p = PhysicsParams::default();
        assert_eq!(p.gravity_edge, 500.0);
        assert_eq!(p.restitution_edge, 0.0);
        assert_eq!(p.gravity_swarm, 0.0);
        assert_eq!(p.restitution_swarm, 1.0);
        assert_eq!(p.frame_rate, FrameRate::Fps60);
        assert_relative_eq!(p.dt(), 1.0 / 60.0);
    }

    #[test]
    fn from_json_fills_missing_fields_and_clamps() {
        let p = PhysicsParams::from_json(r#"{"restitutionEdge": 1.7, "frameRate": 120}"#).unwrap();
        assert_eq!(p.restitution_edge, 1.0);
        assert_eq!(p.gravity_edge, DEFAULT_GRAVITY_EDGE);
        assert_eq!(p.frame_rate, FrameRate::Fps120);
    }

    #[test]
    fn from_json_rejects_unknown_frame_rate() {
        let err = PhysicsParams::from_json(r#"{"frameRate": 75}"#).unwrap_err();
        assert!(err.to_string().contains("75"));
    }

    #[test]
    fn sanitized_replaces_non_finite_values() {
        let p = PhysicsParams {
            gravity_swarm: f64::NAN,
            restitution_swarm: -0.5,
            ..PhysicsParams::default()
        }
        .sanitized();
        assert_eq!(p.gravity_swarm, DEFAULT_GRAVITY_SWARM);
        assert_eq!(p.restitution_swarm, 0.0);
    }

    #[test]
    fn json_round_trip_uses_camel_case_and_bare_rate() {
        let json = PhysicsParams::default().to_json();
        assert!(json.contains("\"gravityEdge\":500.0"));
        assert!(json.contains("\"frameRate\":60"));
    }
}
