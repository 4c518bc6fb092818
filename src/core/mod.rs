//! Geometry shared by every system: vectors, regions and bounds lookup.

pub mod bounds;
pub mod region;
pub mod vec2;

pub use bounds::{BoundsProvider, FixedBounds, RegionSnapshot, Scope};
pub use region::Region;
pub use vec2::Vec2;
