//! Error types for the PostgreSQL backend.

use seed_backend::BackendError;
use seed_core::SqlType;
use thiserror::Error;

/// Backend name used in errors and logs.
pub const BACKEND_NAME: &str = "postgres";

/// Errors that can occur while seeding PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgresBackendError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// A record value does not fit its column.
    #[error("Column '{column}' ({sql_type}) cannot hold value {value}")]
    TypeMismatch {
        column: String,
        sql_type: SqlType,
        value: String,
    },
}

impl From<PostgresBackendError> for BackendError {
    fn from(err: PostgresBackendError) -> Self {
        BackendError::query(BACKEND_NAME, err)
    }
}
