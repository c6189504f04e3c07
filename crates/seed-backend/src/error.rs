//! Error taxonomy shared by all backends.

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed underlying driver error.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors surfaced by a backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The engine could not be reached.
    #[error("{backend} is unavailable: {source} (hint: {hint})")]
    Unavailable {
        backend: &'static str,
        hint: String,
        #[source]
        source: BoxError,
    },

    /// A statement or request was rejected by the engine.
    #[error("{backend} query failed: {source}")]
    Query {
        backend: &'static str,
        #[source]
        source: BoxError,
    },

    /// The engine answered with something the backend cannot interpret.
    #[error("{backend} returned an unexpected response: {message}")]
    UnexpectedResponse {
        backend: &'static str,
        message: String,
    },
}

impl BackendError {
    /// Connection failure with a remediation hint.
    pub fn unavailable(
        backend: &'static str,
        hint: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Unavailable {
            backend,
            hint: hint.into(),
            source: source.into(),
        }
    }

    /// Statement failure.
    pub fn query(backend: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Query {
            backend,
            source: source.into(),
        }
    }

    /// Malformed or unexpected engine response.
    pub fn unexpected(backend: &'static str, message: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            backend,
            message: message.into(),
        }
    }

    /// Name of the backend that raised the error.
    pub fn backend(&self) -> &'static str {
        match self {
            Self::Unavailable { backend, .. }
            | Self::Query { backend, .. }
            | Self::UnexpectedResponse { backend, .. } => backend,
        }
    }

    /// Whether this is a connection failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unavailable_message_carries_hint() {
        let err = BackendError::unavailable(
            "postgres",
            "is the postgres service running?",
            "connection refused",
        );
        let message = err.to_string();

        assert!(err.is_unavailable());
        assert_eq!(err.backend(), "postgres");
        assert!(message.contains("connection refused"));
        assert!(message.contains("is the postgres service running?"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_query_and_unexpected() {
        let err = BackendError::query("mysql", "syntax error");
        assert_eq!(err.to_string(), "mysql query failed: syntax error");

        let err = BackendError::unexpected("elasticsearch", "missing 'items'");
        assert!(!err.is_unavailable());
        assert!(err.to_string().contains("missing 'items'"));
    }
}
