use thiserror::Error;

/// Errors raised by the parameter statistics engine.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("invalid domain: min {min} must be finite and <= max {max}")]
    InvalidDomain { min: f32, max: f32 },
    #[error("expected {expected} parameter values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("variability modifier {0} must be finite and >= 0")]
    InvalidModifier(f32),
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ParamError>;
