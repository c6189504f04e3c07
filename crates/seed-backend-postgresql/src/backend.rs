//! PostgreSQL backend.

use crate::args::PostgresArgs;
use crate::ddl::PostgresDdl;
use crate::error::{PostgresBackendError, BACKEND_NAME};
use crate::insert::insert_records;
use seed_backend::{Backend, BackendError, ConnectionInfo};
use seed_core::{Customer, EntityKind, Product, Record, Schema, ToDdl};
use tokio::task::JoinHandle;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, info};

/// Live connection: the client plus the task driving its socket.
struct Connection {
    client: Client,
    driver: JoinHandle<()>,
}

/// PostgreSQL storage backend.
pub struct PostgresBackend {
    args: PostgresArgs,
    conn: Option<Connection>,
}

impl PostgresBackend {
    /// Create a backend; nothing is opened until first use.
    pub fn new(args: PostgresArgs) -> Self {
        Self { args, conn: None }
    }

    /// Connection settings.
    pub fn args(&self) -> &PostgresArgs {
        &self.args
    }

    async fn client(&mut self) -> Result<&mut Client, BackendError> {
        self.connect().await?;
        match self.conn.as_mut() {
            Some(conn) => Ok(&mut conn.client),
            None => Err(BackendError::unexpected(BACKEND_NAME, "connection not established")),
        }
    }

    async fn execute(&mut self, sql: &str) -> Result<(), BackendError> {
        debug!("SQL: {}", sql);
        let client = self.client().await?;
        client
            .batch_execute(sql)
            .await
            .map_err(PostgresBackendError::from)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Backend for PostgresBackend {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn supports_normalization(&self) -> bool {
        true
    }

    async fn connect(&mut self) -> Result<(), BackendError> {
        if self.conn.is_some() {
            return Ok(());
        }

        let hint = format!(
            "is the postgres service running and reachable at {}:{}?",
            self.args.host, self.args.port
        );
        let (client, connection) = self
            .args
            .to_config()
            .connect(NoTls)
            .await
            .map_err(|e| BackendError::unavailable(BACKEND_NAME, hint, e))?;

        // Spawn the connection task
        let driver = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!("PostgreSQL connection error: {}", e);
            }
        });

        info!(
            "Connected to PostgreSQL at {}:{}/{}",
            self.args.host, self.args.port, self.args.database
        );
        self.conn = Some(Connection { client, driver });
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), BackendError> {
        if let Some(Connection { client, driver }) = self.conn.take() {
            drop(client);
            if let Err(e) = driver.await {
                debug!("PostgreSQL connection task ended abnormally: {e}");
            }
            debug!("Disconnected from PostgreSQL");
        }
        Ok(())
    }

    async fn create_table(&mut self, schema: &Schema, normalized: bool) -> Result<(), BackendError> {
        let layout = schema.layout(normalized);
        info!("Creating table: {}", layout.table_name);
        self.execute(&PostgresDdl.to_create_table(&layout)).await
    }

    async fn insert_batch(
        &mut self,
        schema: &Schema,
        records: &[Record],
        normalized: bool,
    ) -> Result<u64, BackendError> {
        let layout = schema.layout(normalized);
        let client = self.client().await?;
        let inserted = insert_records(client, &layout, records, false).await?;
        debug!(
            "Inserted {} of {} rows into {}",
            inserted,
            records.len(),
            layout.table_name
        );
        Ok(inserted)
    }

    async fn get_count(&mut self, table: &str) -> Result<u64, BackendError> {
        let sql = PostgresDdl.to_count(table);
        let client = self.client().await?;
        let row = client
            .query_one(&sql, &[])
            .await
            .map_err(PostgresBackendError::from)?;
        let count: i64 = row.try_get(0).map_err(PostgresBackendError::from)?;
        Ok(count.max(0) as u64)
    }

    async fn drop_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Dropping table: {}", table);
        self.execute(&PostgresDdl.to_drop_table(table)).await
    }

    async fn truncate_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Truncating table: {}", table);
        self.execute(&PostgresDdl.to_truncate(table)).await
    }

    async fn create_normalized_tables(&mut self) -> Result<(), BackendError> {
        for entity in [EntityKind::Customer, EntityKind::Product] {
            let layout = entity.layout();
            info!("Creating table: {}", layout.table_name);
            self.execute(&PostgresDdl.to_create_table(&layout)).await?;
        }
        Ok(())
    }

    async fn insert_normalized_entities(
        &mut self,
        customers: &[Customer],
        products: &[Product],
    ) -> Result<(), BackendError> {
        let customer_rows: Vec<Record> = customers.iter().map(Customer::to_record).collect();
        let product_rows: Vec<Record> = products.iter().map(Product::to_record).collect();

        let client = self.client().await?;
        let inserted =
            insert_records(client, &EntityKind::Customer.layout(), &customer_rows, true).await?;
        debug!("Inserted {} of {} customers", inserted, customers.len());

        let inserted =
            insert_records(client, &EntityKind::Product.layout(), &product_rows, true).await?;
        debug!("Inserted {} of {} products", inserted, products.len());
        Ok(())
    }

    fn connection_info(&self) -> ConnectionInfo {
        let PostgresArgs {
            host,
            port,
            user,
            password,
            database,
        } = &self.args;
        ConnectionInfo {
            host: Some(host.clone()),
            port: Some(*port),
            user: Some(user.clone()),
            password: Some(password.clone()),
            database: Some(database.clone()),
            url: None,
            connect_cmd: Some(format!("psql -h {host} -p {port} -U {user} -d {database}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_info() {
        let backend = PostgresBackend::new(PostgresArgs::default());
        let info = backend.connection_info();

        assert_eq!(info.port, Some(5432));
        assert_eq!(
            info.connect_cmd.as_deref(),
            Some("psql -h localhost -p 5432 -U analyticsUser -d analytics")
        );
        assert!(backend.supports_normalization());
    }

    #[tokio::test]
    async fn test_unreachable_server_reports_hint() {
        let args = PostgresArgs {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..Default::default()
        };
        let mut backend = PostgresBackend::new(args);

        let err = backend.connect().await.unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("is the postgres service running"));
        assert!(!backend.is_healthy().await);
        // Disconnect without a connection is a no-op
        backend.disconnect().await.unwrap();
    }
}
