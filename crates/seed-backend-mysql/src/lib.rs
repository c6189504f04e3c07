//! MySQL backend for ecosystem-seed.
//!
//! Tables use `INT AUTO_INCREMENT PRIMARY KEY` ids, `DATETIME` timestamps,
//! table-level `FOREIGN KEY` constraints and the InnoDB engine. Inserts use
//! `INSERT IGNORE` per record in one transaction per batch.

pub mod args;
pub mod backend;
pub mod ddl;
pub mod error;
pub mod insert;

pub use args::MySqlArgs;
pub use backend::MySqlBackend;
pub use ddl::MySqlDdl;
pub use error::MySqlBackendError;
