//! Seeding session errors.

use seed_backend::BackendError;
use seed_core::SchemaError;
use seed_generator::WindowError;
use thiserror::Error;

/// Errors that abort a seeding session.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Unknown schema name.
    #[error(transparent)]
    UnknownSchema(#[from] SchemaError),

    /// Unknown backend name or alias.
    #[error("Unknown backend: {name}. Available: {}", available.join(", "))]
    UnknownBackend { name: String, available: Vec<String> },

    /// Malformed date string.
    #[error("Invalid date '{value}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Start date after end date.
    #[error(transparent)]
    InvalidWindow(#[from] WindowError),

    /// Record count of zero.
    #[error("Record count must be positive")]
    InvalidCount,

    /// Batch size of zero.
    #[error("Batch size must be positive")]
    InvalidBatchSize,

    /// The backend failed while seeding.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl SeedError {
    /// Whether the error was raised before any backend call.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::Backend(_))
    }
}
