use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("embed color `{0}` is not a #RRGGBB hex value")]
    InvalidColor(String),
    #[error("could not encode payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("webhook rejected payload: {0}")]
    Rejected(String),
}
