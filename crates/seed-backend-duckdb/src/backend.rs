//! DuckDB backend.

use crate::args::DuckDbArgs;
use crate::ddl::DuckDbDdl;
use crate::error::{DuckDbBackendError, BACKEND_NAME};
use crate::ids::IdAllocator;
use crate::insert::insert_records;
use duckdb::Connection;
use seed_backend::{Backend, BackendError, ConnectionInfo};
use seed_core::schema::ID_FIELD;
use seed_core::{Customer, EntityKind, Product, Record, Schema, TableLayout, ToDdl};
use tracing::{debug, info};

/// DuckDB storage backend.
pub struct DuckDbBackend {
    args: DuckDbArgs,
    conn: Option<Connection>,
    ids: IdAllocator,
}

impl DuckDbBackend {
    /// Create a backend; the file is opened on first use.
    pub fn new(args: DuckDbArgs) -> Self {
        Self {
            args,
            conn: None,
            ids: IdAllocator::new(),
        }
    }

    /// Connection settings.
    pub fn args(&self) -> &DuckDbArgs {
        &self.args
    }

    fn conn(&mut self) -> Result<&mut Connection, BackendError> {
        self.open()?;
        self.conn
            .as_mut()
            .ok_or_else(|| BackendError::unexpected(BACKEND_NAME, "connection not established"))
    }

    fn open(&mut self) -> Result<(), BackendError> {
        if self.conn.is_some() {
            return Ok(());
        }

        let path = &self.args.path;
        let hint = format!("is {} a writable DuckDB file path?", path.display());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| BackendError::unavailable(BACKEND_NAME, hint.clone(), e))?;
        }
        let conn =
            Connection::open(path).map_err(|e| BackendError::unavailable(BACKEND_NAME, hint, e))?;

        info!("Opened DuckDB database at {}", path.display());
        self.conn = Some(conn);
        Ok(())
    }

    fn execute(&mut self, sql: &str) -> Result<(), BackendError> {
        debug!("SQL: {}", sql);
        self.conn()?
            .execute_batch(sql)
            .map_err(DuckDbBackendError::from)?;
        Ok(())
    }

    /// Assign ids and insert, returning the rows persisted.
    fn insert_with_ids(
        &mut self,
        layout: &TableLayout,
        mut records: Vec<Record>,
    ) -> Result<u64, BackendError> {
        let table = layout.table_name.as_str();
        if !self.ids.is_seeded(table) {
            let sql = DuckDbDdl.to_max_id(table, ID_FIELD);
            let max_id: Option<i64> = self
                .conn()?
                .query_row(&sql, [], |row| row.get(0))
                .map_err(DuckDbBackendError::from)?;
            debug!("Seeding id counter for {} after {:?}", table, max_id);
            self.ids.seed(table, max_id);
        }
        self.ids.assign(table, &mut records);

        let inserted = insert_records(self.conn()?, layout, &records)?;
        Ok(inserted)
    }
}

#[async_trait::async_trait]
impl Backend for DuckDbBackend {
    fn name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn supports_normalization(&self) -> bool {
        true
    }

    async fn connect(&mut self) -> Result<(), BackendError> {
        self.open()
    }

    async fn disconnect(&mut self) -> Result<(), BackendError> {
        if let Some(conn) = self.conn.take() {
            conn.close()
                .map_err(|(_, e)| DuckDbBackendError::from(e))?;
            debug!("Closed DuckDB database");
        }
        Ok(())
    }

    async fn create_table(&mut self, schema: &Schema, normalized: bool) -> Result<(), BackendError> {
        let layout = schema.layout(normalized);
        info!("Creating table: {}", layout.table_name);
        self.execute(&DuckDbDdl.to_create_table(&layout))
    }

    async fn insert_batch(
        &mut self,
        schema: &Schema,
        records: &[Record],
        normalized: bool,
    ) -> Result<u64, BackendError> {
        if records.is_empty() {
            return Ok(0);
        }

        let layout = schema.layout(normalized);
        let inserted = self.insert_with_ids(&layout, records.to_vec())?;
        debug!(
            "Inserted {} of {} rows into {}",
            inserted,
            records.len(),
            layout.table_name
        );
        Ok(inserted)
    }

    async fn get_count(&mut self, table: &str) -> Result<u64, BackendError> {
        let sql = DuckDbDdl.to_count(table);
        let count: i64 = self
            .conn()?
            .query_row(&sql, [], |row| row.get(0))
            .map_err(DuckDbBackendError::from)?;
        Ok(count.max(0) as u64)
    }

    async fn drop_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Dropping table: {}", table);
        self.execute(&DuckDbDdl.to_drop_table(table))?;
        self.ids.forget(table);
        Ok(())
    }

    async fn truncate_table(&mut self, table: &str) -> Result<(), BackendError> {
        info!("Truncating table: {}", table);
        self.execute(&DuckDbDdl.to_delete_all(table))
    }

    async fn create_normalized_tables(&mut self) -> Result<(), BackendError> {
        for entity in [EntityKind::Customer, EntityKind::Product] {
            let layout = entity.layout();
            info!("Creating table: {}", layout.table_name);
            self.execute(&DuckDbDdl.to_create_table(&layout))?;
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

        let inserted =
            insert_records(self.conn()?, &EntityKind::Customer.layout(), &customer_rows)?;
        debug!("Inserted {} of {} customers", inserted, customers.len());

        let inserted = insert_records(self.conn()?, &EntityKind::Product.layout(), &product_rows)?;
        debug!("Inserted {} of {} products", inserted, products.len());
        Ok(())
    }

    fn connection_info(&self) -> ConnectionInfo {
        let path = self.args.path.display().to_string();
        ConnectionInfo {
            connect_cmd: Some(format!("duckdb {path}")),
            database: Some(path),
            ..Default::default()
        }
    }
}
