//! Error types for the DuckDB backend.

use seed_backend::BackendError;
use seed_core::SqlType;
use thiserror::Error;

/// Backend name used in errors and logs.
pub const BACKEND_NAME: &str = "duckdb";

/// Errors that can occur while seeding DuckDB.
#[derive(Error, Debug)]
pub enum DuckDbBackendError {
    /// DuckDB error.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// A record value does not fit its column.
    #[error("Column '{column}' ({sql_type}) cannot hold value {value}")]
    TypeMismatch {
        column: String,
        sql_type: SqlType,
        value: String,
    },
}

impl From<DuckDbBackendError> for BackendError {
    fn from(err: DuckDbBackendError) -> Self {
        BackendError::query(BACKEND_NAME, err)
    }
}
