//! Fake record generator for ecosystem-seed.
//!
//! This crate provides the [`RecordGenerator`] which produces records for a
//! [`seed_core::Schema`]. All randomness flows through an explicit
//! [`FakeData`] context backed by a seeded RNG, so the same seed, schema and
//! date window always produce the same records.
//!
//! # Architecture
//!
//! ```text
//! Schema + DateWindow + seed
//!            │
//!            ▼
//! ┌────────────────────┐
//! │  RecordGenerator   │
//! │                    │
//! │  - schema          │
//! │  - window          │
//! │  - fake (StdRng)   │
//! │  - index           │
//! └─────────┬──────────┘
//!           │
//!           ▼
//!     Record { field -> Value }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_core::registry::get_schema;
//! use seed_generator::{DateWindow, RecordGenerator};
//!
//! let schema = get_schema("contacts").unwrap();
//! let mut generator = RecordGenerator::new(schema, DateWindow::default(), 42);
//!
//! let sizes: Vec<usize> = generator.generate_batches(25, 10).map(|b| b.len()).collect();
//! assert_eq!(sizes, vec![10, 10, 5]);
//! ```
//!
//! # Generators
//!
//! - person: first/last/full names, email, phone number, job title
//! - address: street address, city, state abbreviation, postal code, country
//! - company: company name, catch phrase
//! - text: bounded paragraph text
//! - pattern: `{index}`, `{uuid}`, `{hex:N}`, `{digits:N}`, `{int:MIN:MAX:WIDTH}`
//! - numeric: integer range, decimal range, weighted boolean
//! - line_items: JSON array of invoice line items
//! - timestamp: uniform timestamps inside a [`DateWindow`]

pub mod context;
pub mod generator;
pub mod generators;
pub mod window;

// Re-exports for convenience
pub use context::FakeData;
pub use generator::{BatchIterator, RecordGenerator};
pub use window::{DateWindow, WindowError};
