//! Backend trait definition.

use crate::error::BackendError;
use crate::info::ConnectionInfo;
use seed_core::{Customer, Product, Record, Schema};
use tracing::debug;

/// A storage engine adapter.
///
/// One backend instance owns one connection for one seeding session. The
/// connection is established lazily on first use (or by an explicit
/// [`Backend::connect`]) and torn down by [`Backend::disconnect`]. Calls are
/// awaited one after another; implementations need no internal locking.
///
/// Inserts skip rows that violate a uniqueness constraint and report how
/// many rows were actually persisted.
#[async_trait::async_trait]
pub trait Backend: Send {
    /// Canonical backend name (e.g. `postgres`).
    fn name(&self) -> &'static str;

    /// Whether normalized mode (entity tables plus foreign keys) is supported.
    fn supports_normalization(&self) -> bool;

    /// Establish the connection. Idempotent.
    async fn connect(&mut self) -> Result<(), BackendError>;

    /// Close the connection. A no-op when not connected.
    async fn disconnect(&mut self) -> Result<(), BackendError>;

    /// Create the schema's target table (or index) if it does not exist.
    async fn create_table(&mut self, schema: &Schema, normalized: bool)
        -> Result<(), BackendError>;

    /// Insert a batch, skipping conflicting rows.
    ///
    /// Returns the number of rows persisted.
    async fn insert_batch(
        &mut self,
        schema: &Schema,
        records: &[Record],
        normalized: bool,
    ) -> Result<u64, BackendError>;

    /// Number of rows in `table`.
    async fn get_count(&mut self, table: &str) -> Result<u64, BackendError>;

    /// Drop `table` if it exists.
    async fn drop_table(&mut self, table: &str) -> Result<(), BackendError>;

    /// Remove every row of `table`.
    async fn truncate_table(&mut self, table: &str) -> Result<(), BackendError>;

    /// Create the `customers` and `products_normalized` tables.
    async fn create_normalized_tables(&mut self) -> Result<(), BackendError> {
        Ok(())
    }

    /// Insert extracted entities with their surrogate ids, skipping conflicts.
    async fn insert_normalized_entities(
        &mut self,
        _customers: &[Customer],
        _products: &[Product],
    ) -> Result<(), BackendError> {
        Ok(())
    }

    /// Where the seeded data can be reached.
    fn connection_info(&self) -> ConnectionInfo {
        ConnectionInfo::default()
    }

    /// Whether the engine is reachable. Never fails.
    async fn is_healthy(&mut self) -> bool {
        match self.connect().await {
            Ok(()) => {
                if let Err(e) = self.disconnect().await {
                    debug!("Health check disconnect failed: {e}");
                }
                true
            }
            Err(e) => {
                debug!("Health check failed for {}: {e}", self.name());
                false
            }
        }
    }
}
