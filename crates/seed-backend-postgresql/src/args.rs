//! Connection settings for the PostgreSQL backend.

use clap::Args;

/// PostgreSQL connection arguments.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct PostgresArgs {
    /// PostgreSQL host
    #[arg(long = "postgres-host", env = "POSTGRES_HOST", default_value = "localhost")]
    pub host: String,

    /// PostgreSQL port
    #[arg(long = "postgres-port", env = "POSTGRES_PORT", default_value_t = 5432)]
    pub port: u16,

    /// PostgreSQL user
    #[arg(long = "postgres-user", env = "POSTGRES_USER", default_value = "analyticsUser")]
    pub user: String,

    /// PostgreSQL password
    #[arg(
        long = "postgres-password",
        env = "POSTGRES_PASSWORD",
        default_value = "analyticsPass"
    )]
    pub password: String,

    /// PostgreSQL database
    #[arg(long = "postgres-db", env = "POSTGRES_DB", default_value = "analytics")]
    pub database: String,
}

impl Default for PostgresArgs {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "analyticsUser".to_string(),
            password: "analyticsPass".to_string(),
            database: "analytics".to_string(),
        }
    }
}

impl PostgresArgs {
    /// Driver configuration for these settings.
    pub fn to_config(&self) -> tokio_postgres::Config {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .user(&self.user)
            .password(&self.password)
            .dbname(&self.database);
        config
    }
}
