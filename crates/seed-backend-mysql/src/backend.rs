//! MySQL backend.

use crate::args::MySqlArgs;
use crate::ddl::{MySqlDdl, FK_CHECKS_OFF, FK_CHECKS_ON};
use crate::error::{MySqlBackendError, BACKEND_NAME};
use crate::insert::insert_records;
use mysql_async::prelude::*;
use mysql_async::Conn;
use seed_backend::{Backend, BackendError, ConnectionInfo};
use seed_core::{Customer, EntityKind, Product, Record, Schema, ToDdl};
use tracing::{debug, info};

/// MySQL storage backend.
pub struct MySqlBackend {
    args: MySqlArgs,
    conn: Option<Conn>,
}

impl MySqlBackend {
    /// Create a backend; nothing is opened until first use.
    pub fn new(args: MySqlArgs) -> Self {
        Self { args, conn: None }
    }

    /// Connection settings.
    pub fn args(&self) -> &MySqlArgs {
        &self.args
    }

    async fn conn(&mut self) -> Result<&mut Conn, BackendError> {
        self.connect().await?;
        self.conn
            .as_mut()
            .ok_or_else(|| BackendError::unexpected(BACKEND_NAME, "connection not established"))
    }

    async fn execute_all(&mut self, statements: &[String]) -> Result<(), BackendError> {
        let conn = self.conn().await?;
        for sql in statements {
            debug!("SQL: {}", sql);
            conn.query_drop(sql.as_str()).await.map_err(MySqlBackendError::from)?;
        }
        Ok(())
    }

    /// Run `sql` with foreign-key checks disabled.
    ///
    /// Checks are switched back on whether or not `sql` succeeds.
    async fn execute_without_fk_checks(&mut self, sql: &str) -> Result<(), BackendError> {
        let conn = self.conn().await?;
        conn.query_drop(FK_CHECKS_OFF)
            .await
            .map_err(MySqlBackendError::from)?;

        debug!("SQL: {}", sql);
        let statement = conn.query_drop(sql).await;
        let restore = conn.query_drop(FK_CHECKS_ON).await;
        first_failure(statement, restore).map_err(MySqlBackendError::from)?;
        Ok(())
    }
}

/// The statement's error if it failed, otherwise the restore step's.
fn first_failure<E>(statement: Result<(), E>, restore: Result<(), E>) -> Result<(), E> {
    statement?;
    restore
}

#[async_trait::async_trait]
impl Backend for MySqlBackend {
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
            "is the mysql service running and reachable at {}:{}?",
            self.args.host, self.args.port
        );
        let conn = Conn::new(self.args.to_opts())
            .await
            .map_err(|e| BackendError::unavailable(BACKEND_NAME, hint, e))?;

        info!(
            "Connected to MySQL at {}:{}/{}",
            self.args.host, self.args.port, self.args.database
        );
        self.conn = Some(conn);
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<(), BackendError> {
        if let Some(conn) = self.conn.take() {
            conn.disconnect().await.map_err(MySqlBackendError::from)?;
            debug!("Disconnected from MySQL");
        }
        Ok(())
    }

    async fn create_table(&mut self, schema: &Schema, normalized: bool) -> Result<(), BackendError> {
        let layout = schema.layout(normalized);
        info!("Creating table: {}", layout.table_name);
        self.execute_all(&[MySqlDdl.to_create_table(&layout)]).await
    }

    async fn insert_batch(
        &mut self,
        schema: &Schema,
        records: &[Record],
        normalized: bool,
    ) -> Result<u64, BackendError> {
        let layout = schema.layout(normalized);
        let conn = self.conn().await?;
        let inserted = insert_records(conn, &layout, records, false).await?;
        debug!(
            "Inserted {} of {} rows into {}",
            inserted,
            records.len(),
            layout.table_name
        );
        Ok(inserted)
    }

    async fn get_count(&mut self, table: &str) -> Result<u64, BackendError> {
        let sql = MySqlDdl.to_count(table);
        let conn = self.conn().await?;
        let count: Option<i64> = conn
            .query_first(sql.as_str())
            .await
            .map_err(MySqlBackendError::from)?;
        Ok(count.unwrap_or(0).max(0) as u64)
    }

    async fn drop_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Dropping table: {}", table);
        self.execute_without_fk_checks(&MySqlDdl.to_drop_table(table))
            .await
    }

    async fn truncate_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Truncating table: {}", table);
        self.execute_without_fk_checks(&MySqlDdl.to_truncate(table))
            .await
    }

    async fn create_normalized_tables(&mut self) -> Result<(), BackendError> {
        let statements: Vec<String> = [EntityKind::Customer, EntityKind::Product]
            .iter()
            .map(|entity| MySqlDdl.to_create_table(&entity.layout()))
            .collect();
        info!("Creating tables: customers, products_normalized");
        self.execute_all(&statements).await
    }

    async fn insert_normalized_entities(
        &mut self,
        customers: &[Customer],
        products: &[Product],
    ) -> Result<(), BackendError> {
        let customer_rows: Vec<Record> = customers.iter().map(Customer::to_record).collect();
        let product_rows: Vec<Record> = products.iter().map(Product::to_record).collect();

        let conn = self.conn().await?;
        let inserted =
            insert_records(conn, &EntityKind::Customer.layout(), &customer_rows, true).await?;
        debug!("Inserted {} of {} customers", inserted, customers.len());

        let inserted =
            insert_records(conn, &EntityKind::Product.layout(), &product_rows, true).await?;
        debug!("Inserted {} of {} products", inserted, products.len());
        Ok(())
    }

    fn connection_info(&self) -> ConnectionInfo {
        let MySqlArgs {
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
            connect_cmd: Some(format!("mysql -h {host} -P {port} -u {user} -p {database}")),
        }
    }
}
