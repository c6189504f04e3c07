//! Connection settings for the Elasticsearch backend.

use clap::Args;

/// Elasticsearch connection arguments.
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct ElasticsearchArgs {
    /// Elasticsearch host
    #[arg(
        long = "elasticsearch-host",
        env = "ELASTICSEARCH_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    /// Elasticsearch HTTP port
    #[arg(long = "elasticsearch-port", env = "ELASTICSEARCH_PORT", default_value_t = 9200)]
    pub port: u16,
}

impl Default for ElasticsearchArgs {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 9200,
        }
    }
}

impl ElasticsearchArgs {
    /// Base URL of the REST API, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
