//! Elasticsearch backend for ecosystem-seed.
//!
//! Talks to the REST API directly with `reqwest`. A schema maps to an index
//! created with the schema's field mapping; records are indexed through the
//! `_bulk` endpoint as NDJSON. Normalized mode is not supported.

pub mod args;
pub mod backend;
pub mod bulk;
pub mod error;

pub use args::ElasticsearchArgs;
pub use backend::ElasticsearchBackend;
pub use error::ElasticsearchBackendError;
