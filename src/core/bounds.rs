//! Bounds lookup for the two simulated surfaces.
//!
//! Display enumeration lives outside the engine. The driver hands the engine a
//! `BoundsProvider`, the engine pulls a `RegionSnapshot` from it whenever the
//! display layout changes and treats that snapshot as immutable for a tick.

use serde::{Deserialize, Serialize};

use super::region::Region;

/// Which surface a region is requested for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// Region the gravity-bound edge body falls and snaps within
    Edge,
    /// Region the free-floating swarm bounces within
    Swarm,
}

pub trait BoundsProvider {
    fn region_for(&self, scope: Scope) -> Region;
}

impl<F> BoundsProvider for F
where
    F: Fn(Scope) -> Region,
{
    fn region_for(&self, scope: Scope) -> Region {
        self(scope)
    }
}

/// Provider backed by two fixed rectangles (tests, wasm hosts that push frames in)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FixedBounds {
    pub edge: Region,
    pub swarm: Region,
}

impl FixedBounds {
    pub fn new(edge: Region, swarm: Region) -> Self {
        Self { edge, swarm }
    }
}

impl BoundsProvider for FixedBounds {
    fn region_for(&self, scope: Scope) -> Region {
        match scope {
            Scope::Edge => self.edge,
            Scope::Swarm => self.swarm,
        }
    }
}

/// Per-tick copy of both regions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RegionSnapshot {
    pub edge: Region,
    pub swarm: Region,
}

impl RegionSnapshot {
    pub fn capture(provider: &dyn BoundsProvider) -> Self {
        Self {
            edge: provider.region_for(Scope::Edge),
            swarm: provider.region_for(Scope::Swarm),
        }
    }

    pub fn get(&self, scope: Scope) -> Region {
        match scope {
            Scope::Edge => self.edge,
            Scope::Swarm => self.swarm,
        }
    }
}
