//! Domain values: physics parameters, tuning constants and configuration errors.

pub mod constants;
pub mod error;
pub mod params;

pub use constants::Tuning;
pub use error::ConfigError;
pub use params::{FrameRate, PhysicsParams};
