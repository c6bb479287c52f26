// src/error.rs
use thiserror::Error;

/// Anything that can go wrong between us and the market API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}
