//! Error types for the MySQL backend.

use seed_backend::BackendError;
use seed_core::SqlType;
use thiserror::Error;

/// Backend name used in errors and logs.
pub const BACKEND_NAME: &str = "mysql";

/// Errors that can occur while seeding MySQL.
#[derive(Error, Debug)]
pub enum MySqlBackendError {
    /// MySQL connection or query error.
    #[error("MySQL error: {0}")]
    MySQL(#[from] mysql_async::Error),

    /// A record value does not fit its column.
    #[error("Column '{column}' ({sql_type}) cannot hold value {value}")]
    TypeMismatch {
        column: String,
        sql_type: SqlType,
        value: String,
    },
}

impl From<MySqlBackendError> for BackendError {
    fn from(err: MySqlBackendError) -> Self {
        BackendError::query(BACKEND_NAME, err)
    }
}
