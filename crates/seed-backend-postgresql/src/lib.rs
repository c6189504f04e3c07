//! PostgreSQL backend for ecosystem-seed.
//!
//! Tables use `SERIAL PRIMARY KEY` ids and inline `REFERENCES` clauses.
//! Inserts run one `INSERT ... ON CONFLICT DO NOTHING` per record inside a
//! single transaction per batch, so unique violations are skipped and the
//! affected-row total is the number of records persisted.

pub mod args;
pub mod backend;
pub mod ddl;
pub mod error;
pub mod insert;

pub use args::PostgresArgs;
pub use backend::PostgresBackend;
pub use ddl::PostgresDdl;
pub use error::PostgresBackendError;
