//! Connection settings for the DuckDB backend.

use clap::Args;
use std::path::PathBuf;

/// Default database file.
pub const DEFAULT_DUCKDB_PATH: &str = "./shared/data/duckdb.db";

/// DuckDB connection arguments.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct DuckDbArgs {
    /// Path to the DuckDB database file
    #[arg(long = "duckdb-path", env = "DUCKDB_PATH", default_value = DEFAULT_DUCKDB_PATH)]
    pub path: PathBuf,
}

impl Default for DuckDbArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DUCKDB_PATH),
        }
    }
}
