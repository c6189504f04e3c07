//! Storage backend contract.
//!
//! This crate defines the [`Backend`] trait every storage engine adapter
//! implements, the shared [`BackendError`] taxonomy and the
//! [`ConnectionInfo`] a backend reports after a session. Engine crates
//! (`seed-backend-postgresql`, `seed-backend-mysql`,
//! `seed-backend-elasticsearch`, `seed-backend-duckdb`) implement the trait;
//! the orchestrator only ever sees `Box<dyn Backend>`.

mod error;
mod info;
mod traits;

pub use error::BackendError;
pub use info::ConnectionInfo;
pub use traits::Backend;

/// Default number of records per insert batch.
pub const DEFAULT_BATCH_SIZE: usize = 100;
