//! ecosystem-seed library
//!
//! Seeds realistic fake business data into PostgreSQL, MySQL, Elasticsearch
//! and DuckDB so analytics tools have something to work on.
//!
//! # Features
//!
//! - Five built-in schemas: contacts, sales orders, manufacturing orders,
//!   products and invoices
//! - Deterministic generation from a seed and a date window
//! - Optional normalization of customers and products into their own tables
//! - Conflict-skipping batched inserts, so re-runs are safe
//!
//! # Crates
//!
//! - `seed_core` - schemas, values and DDL derivation
//! - `seed_generator` - fake record generation
//! - `seed_normalizer` - customer / product extraction
//! - `seed_backend` - the backend contract
//! - `seed_backend_postgresql`, `seed_backend_mysql`,
//!   `seed_backend_elasticsearch`, `seed_backend_duckdb` - engine adapters
//!
//! # CLI Usage
//!
//! ```bash
//! # 5000 sales orders into PostgreSQL, customers split into their own table
//! ecosystem-seed seed --db postgres --type sales_orders --count 5000 --normalize
//!
//! # Contacts from the first quarter of 2024 into a local DuckDB file
//! ecosystem-seed seed --db duck --type contacts --start 2024-01-01 --end 2024-03-31
//! ```

pub mod backends;
pub mod config;
pub mod seed;

pub use backends::{create_backend, BackendConfig, BackendKind};
pub use seed::{run_seed, SeedError, SeedReport, SeedRequest};
