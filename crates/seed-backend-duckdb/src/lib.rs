//! DuckDB backend for ecosystem-seed.
//!
//! The database is a single embedded file. DuckDB has no auto-increment
//! columns without sequences, so the backend assigns ids itself from a
//! per-table counter (see [`IdAllocator`]). Foreign-key clauses are left out;
//! the reference columns are kept as plain integers. Inserts use
//! `INSERT OR IGNORE`.
//!
//! The driver is synchronous and is called inline from the async trait
//! methods.

pub mod args;
pub mod backend;
pub mod ddl;
pub mod error;
pub mod ids;
pub mod insert;

pub use args::DuckDbArgs;
pub use backend::DuckDbBackend;
pub use ddl::DuckDbDdl;
pub use error::DuckDbBackendError;
pub use ids::IdAllocator;
