//! Core types for the ecosystem-seed pipeline.
//!
//! This crate provides the foundational types shared by the generator,
//! the normalizer and every storage backend:
//!
//! - [`SqlType`] / [`DocType`] - storage-type hints carried by each field
//! - [`Value`] / [`Record`] - generated values and flat records
//! - [`Schema`] / [`FieldDefinition`] - static record shapes
//! - [`TableLayout`] / [`ToDdl`] - concrete column lists and DDL derivation
//! - [`Customer`] / [`Product`] - normalized entities
//! - [`SchemaRegistry`] - the built-in schemas, looked up by name
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator      (produces Records for a Schema)
//!    ├─── seed-normalizer     (extracts Customers / Products from Records)
//!    └─── seed-backend        (Backend contract)
//!            ├── seed-backend-postgresql   (implements ToDdl for PostgreSQL)
//!            ├── seed-backend-mysql        (implements ToDdl for MySQL)
//!            ├── seed-backend-duckdb       (implements ToDdl for DuckDB)
//!            └── seed-backend-elasticsearch (uses Schema::es_mapping)
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::registry::{get_schema, list_schemas};
//!
//! let contacts = get_schema("contacts").unwrap();
//! assert_eq!(contacts.time_field, "created_at");
//! assert_eq!(list_schemas().len(), 5);
//! ```

pub mod entity;
pub mod layout;
pub mod registry;
pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use entity::{Customer, EntityKind, Product, CUSTOMERS_TABLE, PRODUCTS_TABLE};
pub use layout::{ColumnSpec, ForeignKey, TableLayout, ToDdl};
pub use registry::{get_schema, list_schemas, SchemaRegistry};
pub use schema::{EntityExtraction, FieldDefinition, GeneratorConfig, Schema, SchemaError};
pub use types::{DocType, SqlType};
pub use values::{Record, Value};
