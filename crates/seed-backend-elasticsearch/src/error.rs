//! Error types for the Elasticsearch backend.

use seed_backend::BackendError;
use thiserror::Error;

/// Backend name used in errors and logs.
pub const BACKEND_NAME: &str = "elasticsearch";

/// Errors that can occur while seeding Elasticsearch.
#[derive(Error, Debug)]
pub enum ElasticsearchBackendError {
    /// Transport or decoding error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Elasticsearch returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Request body serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ElasticsearchBackendError> for BackendError {
    fn from(err: ElasticsearchBackendError) -> Self {
        BackendError::query(BACKEND_NAME, err)
    }
}
