use thiserror::Error;

/// Failures while loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid physics config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unsupported frame rate {0} (expected one of 30, 48, 50, 60, 120)")]
    UnsupportedFrameRate(u32),
}
