//! Elasticsearch backend.

use crate::args::ElasticsearchArgs;
use crate::bulk::{build_bulk_body, BulkResponse, ClusterHealth, CountResponse};
use crate::error::{ElasticsearchBackendError, BACKEND_NAME};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response, StatusCode};
use seed_backend::{Backend, BackendError, ConnectionInfo};
use seed_core::{Record, Schema};
use serde_json::json;
use tracing::{debug, info, warn};

/// Elasticsearch storage backend.
pub struct ElasticsearchBackend {
    args: ElasticsearchArgs,
    base_url: String,
    client: Option<Client>,
}

impl ElasticsearchBackend {
    /// Create a backend; nothing is contacted until first use.
    pub fn new(args: ElasticsearchArgs) -> Self {
        let base_url = args.base_url();
        Self {
            args,
            base_url,
            client: None,
        }
    }

    /// Connection settings.
    pub fn args(&self) -> &ElasticsearchArgs {
        &self.args
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn client(&mut self) -> Result<Client, BackendError> {
        self.connect().await?;
        self.client
            .clone()
            .ok_or_else(|| BackendError::unexpected(BACKEND_NAME, "client not initialised"))
    }

    fn hint(&self) -> String {
        format!(
            "is the elasticsearch service running and reachable at {}?",
            self.base_url
        )
    }
}

/// Pass through success responses, turn everything else into an error.
async fn check(response: Response) -> Result<Response, ElasticsearchBackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ElasticsearchBackendError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait::async_trait]
impl Backend for ElasticsearchBackend {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn supports_normalization(&self) -> bool {
        false
    }

    async fn connect(&mut self) -> Result<(), BackendError> {
        if self.client.is_some() {
            return Ok(());
        }

        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::unavailable(BACKEND_NAME, self.hint(), e))?;

        // Reachability probe
        let response = client
            .get(self.url("/"))
            .send()
            .await
            .map_err(|e| BackendError::unavailable(BACKEND_NAME, self.hint(), e))?;
        check(response).await?;

        info!("Connected to Elasticsearch at {}", self.base_url);
        self.client = Some(client);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), BackendError> {
        if self.client.take().is_some() {
            debug!("Disconnected from Elasticsearch");
        }
        Ok(())
    }

    async fn create_table(&mut self, schema: &Schema, _normalized: bool) -> Result<(), BackendError> {
        let client = self.client().await?;
        let index = &schema.table_name;

        let exists = client
            .head(self.url(index))
            .send()
            .await
            .map_err(ElasticsearchBackendError::from)?;
        if exists.status() != StatusCode::NOT_FOUND {
            check(exists).await?;
            debug!("Index {} already exists", index);
            return Ok(());
        }

        info!("Creating index: {}", index);
        let response = client
            .put(self.url(index))
            .json(&schema.es_mapping())
            .send()
            .await
            .map_err(ElasticsearchBackendError::from)?;
        check(response).await?;
        Ok(())
    }

    async fn insert_batch(
        &mut self,
        schema: &Schema,
        records: &[Record],
        _normalized: bool,
    ) -> Result<u64, BackendError> {
        if records.is_empty() {
            return Ok(0);
        }

        let client = self.client().await?;
        let body = build_bulk_body(&schema.table_name, records)?;
        let response = client
            .post(self.url("_bulk?refresh=true"))
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await
            .map_err(ElasticsearchBackendError::from)?;
        let response: BulkResponse = check(response)
            .await?
            .json()
            .await
            .map_err(ElasticsearchBackendError::from)?;

        let indexed = response.count_indexed(records.len());
        if let Some(first) = response.failures().next() {
            warn!(
                "{} of {} documents rejected by {}, first error: {}",
                (records.len() as u64).saturating_sub(indexed),
                records.len(),
                schema.table_name,
                first
            );
        }
        debug!(
            "Indexed {} of {} documents into {}",
            indexed,
            records.len(),
            schema.table_name
        );
        Ok(indexed)
    }

    async fn get_count(&mut self, table: &str) -> Result<u64, BackendError> {
        let client = self.client().await?;
        let result = async {
            let response = client.get(self.url(&format!("{table}/_count"))).send().await?;
            let count: CountResponse = check(response).await?.json().await?;
            Ok::<_, ElasticsearchBackendError>(count.count)
        }
        .await;

        match result {
            Ok(count) => Ok(count),
            Err(e) => {
                debug!("Count of {} failed, reporting 0: {}", table, e);
                Ok(0)
            }
        }
    }

    async fn drop_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Deleting index: {}", table);
        let client = self.client().await?;
        let response = client
            .delete(self.url(table))
            .send()
            .await
            .map_err(ElasticsearchBackendError::from)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        check(response).await?;
        Ok(())
    }

    async fn truncate_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Deleting all documents from index: {}", table);
        let client = self.client().await?;
        let response = client
            .post(self.url(&format!("{table}/_delete_by_query?refresh=true")))
            .json(&json!({ "query": { "match_all": {} } }))
            .send()
            .await
            .map_err(ElasticsearchBackendError::from)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(());
        }
        check(response).await?;
        Ok(())
    }

    fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo {
            host: Some(self.args.host.clone()),
            port: Some(self.args.port),
            url: Some(self.base_url.clone()),
            connect_cmd: Some(format!("curl {}/_cat/indices?v", self.base_url)),
            ..Default::default()
        }
    }

    async fn is_healthy(&mut self) -> bool {
        let client = match self.client().await {
            Ok(client) => client,
            Err(e) => {
                debug!("Health check failed for {}: {e}", BACKEND_NAME);
                return false;
            }
        };

        let health = async {
            let response = client.get(self.url("_cluster/health")).send().await?;
            let health: ClusterHealth = check(response).await?.json().await?;
            Ok::<_, ElasticsearchBackendError>(health)
        }
        .await;

        match health {
            Ok(health) => {
                debug!("Cluster status: {}", health.status);
                health.is_usable()
            }
            Err(e) => {
                debug!("Health check failed for {}: {e}", BACKEND_NAME);
                false
            }
        }
    }
}
