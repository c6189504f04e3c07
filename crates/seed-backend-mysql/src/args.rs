//! Connection settings for the MySQL backend.

use clap::Args;
use mysql_async::{Opts, OptsBuilder};

/// MySQL connection arguments.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct MySqlArgs {
    /// MySQL host
    #[arg(long = "mysql-host", env = "MYSQL_HOST", default_value = "localhost")]
    pub host: String,

    /// MySQL port
    #[arg(long = "mysql-port", env = "MYSQL_PORT", default_value_t = 3306)]
    pub port: u16,

    /// MySQL user
    #[arg(long = "mysql-user", env = "MYSQL_USER", default_value = "analyticsUser")]
    pub user: String,

    /// MySQL password
    #[arg(long = "mysql-password", env = "MYSQL_PASSWORD", default_value = "analyticsPass")]
    pub password: String,

    /// MySQL database
    #[arg(long = "mysql-db", env = "MYSQL_DB", default_value = "analytics")]
    pub database: String,
}

impl Default for MySqlArgs {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "analyticsUser".to_string(),
            password: "analyticsPass".to_string(),
            database: "analytics".to_string(),
        }
    }
}

impl MySqlArgs {
    /// Driver options for these settings.
    pub fn to_opts(&self) -> Opts {
        OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(Some(self.password.clone()))
            .db_name(Some(self.database.clone()))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_opts() {
        let opts = MySqlArgs::default().to_opts();
        assert_eq!(opts.ip_or_hostname(), "localhost");
        assert_eq!(opts.tcp_port(), 3306);
        assert_eq!(opts.user(), Some("analyticsUser"));
        assert_eq!(opts.db_name(), Some("analytics"));
    }
}
