//! Error types shared by the scheduler and its ports.

use thiserror::Error;

/// Rejected event configuration. Activation fails and no state is created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no candidate meteor types configured")]
    NoSpawnTypes,
    #[error("wave count range {min}..={max} is empty or negative")]
    InvalidWaveCount { min: i32, max: i32 },
    #[error("wave cooldown range {min}..={max} must be positive and ordered")]
    InvalidCooldown { min: f64, max: f64 },
    #[error("meteors per wave range {min}..={max} is empty or negative")]
    InvalidMeteorsPerWave { min: i32, max: i32 },
    #[error("end delay {0} must be finite and non-negative")]
    InvalidEndDelay(f64),
    #[error("meteor speed {0} must be finite and non-negative")]
    InvalidSpeed(f64),
    #[error("meteor type `{0}` is not known to the host")]
    UnknownSpawnType(String),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure reported by the host when instantiating an object.
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("unknown spawn type `{0}`")]
    UnknownType(String),
    #[error("host refused spawn of `{kind}`: {reason}")]
    Rejected { kind: String, reason: String },
}

/// Failure delivering a notification. Never propagated into scheduler state.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("delivery failed: {0}")]
    Failed(String),
}
