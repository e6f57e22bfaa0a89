use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a whole catalog fetch. Individual records that fail
/// validation are skipped during parsing and never surface here.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream status {status}; body preview: {preview}")]
    Status {
        status: StatusCode,
        preview: String,
    },

    #[error("failed to decode monument payload: {0}")]
    Decode(#[from] serde_json::Error),
}
