//! Backend registry: name and alias resolution plus construction.

use crate::seed::SeedError;
use clap::Args;
use seed_backend::Backend;
use seed_backend_duckdb::{DuckDbArgs, DuckDbBackend};
use seed_backend_elasticsearch::{ElasticsearchArgs, ElasticsearchBackend};
use seed_backend_mysql::{MySqlArgs, MySqlBackend};
use seed_backend_postgresql::{PostgresArgs, PostgresBackend};
use std::fmt;
use std::str::FromStr;

/// The supported storage engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Postgres,
    MySql,
    Elasticsearch,
    DuckDb,
}

impl BackendKind {
    /// Every backend, in listing order.
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Postgres,
        BackendKind::MySql,
        BackendKind::Elasticsearch,
        BackendKind::DuckDb,
    ];

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Elasticsearch => "elasticsearch",
            Self::DuckDb => "duckdb",
        }
    }

    /// Alternative names accepted on the command line.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Postgres => &["pg", "postgresql"],
            Self::MySql => &[],
            Self::Elasticsearch => &["es", "elastic"],
            Self::DuckDb => &["duck"],
        }
    }

    /// Whether the engine stores normalized entities.
    pub fn supports_normalization(&self) -> bool {
        !matches!(self, Self::Elasticsearch)
    }

    /// Canonical names of every backend.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(BackendKind::name).collect()
    }

    /// Resolve a name or alias, ignoring case.
    pub fn resolve(name: &str) -> Result<Self, SeedError> {
        let wanted = name.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted || kind.aliases().contains(&wanted.as_str()))
            .ok_or_else(|| SeedError::UnknownBackend {
                name: name.to_string(),
                available: Self::names().iter().map(|n| n.to_string()).collect(),
            })
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

/// Connection settings for every backend.
///
/// Only the settings of the selected backend are used.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    #[command(flatten)]
    pub postgres: PostgresArgs,

    #[command(flatten)]
    pub mysql: MySqlArgs,

    #[command(flatten)]
    pub elasticsearch: ElasticsearchArgs,

    #[command(flatten)]
    pub duckdb: DuckDbArgs,
}

impl BackendConfig {
    /// Construct a backend. Nothing is connected yet.
    pub fn create(&self, kind: BackendKind) -> Box<dyn Backend> {
        match kind {
            BackendKind::Postgres => Box::new(PostgresBackend::new(self.postgres.clone())),
            BackendKind::MySql => Box::new(MySqlBackend::new(self.mysql.clone())),
            BackendKind::Elasticsearch => {
                Box::new(ElasticsearchBackend::new(self.elasticsearch.clone()))
            }
            BackendKind::DuckDb => Box::new(DuckDbBackend::new(self.duckdb.clone())),
        }
    }
}

/// Resolve `name` and construct the backend.
pub fn create_backend(name: &str, config: &BackendConfig) -> Result<Box<dyn Backend>, SeedError> {
    let kind = BackendKind::resolve(name)?;
    Ok(config.create(kind))
}
