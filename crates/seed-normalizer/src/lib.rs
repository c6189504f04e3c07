//! Normalization of denormalized seed records.
//!
//! Records of schemas that declare [`EntityExtraction`]s carry entity
//! attributes inline (e.g. `customer_name`, `customer_email`). The
//! [`Normalizer`] pulls those attributes out into deduplicated
//! [`Customer`]/[`Product`] tables and replaces them with a surrogate
//! foreign key (`customer_id`, `product_id`).
//!
//! Surrogate ids start at 1 and follow first-seen order. The first sighting
//! of a key fixes the entity's attributes; later records with the same key
//! only reuse its id.
//!
//! # Example
//!
//! ```rust
//! use seed_core::Record;
//! use seed_normalizer::Normalizer;
//!
//! let mut normalizer = Normalizer::new();
//! let record = Record::new()
//!     .with("order_number", "ORD-1")
//!     .with("customer_name", "Ada Lovelace")
//!     .with("customer_email", "ada@example.com");
//!
//! let normalized = normalizer.normalize_record(record, "sales_orders");
//! assert_eq!(normalized.get("customer_id").and_then(|v| v.as_i64()), Some(1));
//! assert!(!normalized.contains("customer_email"));
//! assert_eq!(normalizer.customers().len(), 1);
//! ```

use seed_core::registry::get_schema;
use seed_core::{Customer, EntityExtraction, EntityKind, Product, Record, Schema, Value};
use std::collections::HashMap;
use tracing::trace;

/// Deduplicating entity extractor.
///
/// Owns the customer and product tables for one seeding session.
#[derive(Debug, Default)]
pub struct Normalizer {
    customers: Vec<Customer>,
    customers_by_email: HashMap<String, usize>,
    products: Vec<Product>,
    products_by_sku: HashMap<String, usize>,
}

impl Normalizer {
    /// Create an empty normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a record of the named built-in schema.
    ///
    /// Records of unknown schemas are returned unchanged.
    pub fn normalize_record(&mut self, record: Record, schema_name: &str) -> Record {
        match get_schema(schema_name) {
            Ok(schema) => self.normalize_with(record, schema),
            Err(_) => record,
        }
    }

    /// Normalize a record against `schema`'s entity extractions.
    ///
    /// For each extraction with a non-empty key the entity is looked up or
    /// created, its foreign key is attached and the denormalized fields are
    /// removed. Without a key the record keeps its fields and gets no
    /// foreign key.
    pub fn normalize_with(&mut self, mut record: Record, schema: &Schema) -> Record {
        for extraction in &schema.extractions {
            let Some(id) = self.extract(&record, extraction) else {
                continue;
            };

            for field in &extraction.strip_fields {
                record.remove(field);
            }
            record.insert(extraction.foreign_key_column(), Value::Int(id));
        }
        record
    }

    fn extract(&mut self, record: &Record, extraction: &EntityExtraction) -> Option<i64> {
        let key = first_non_empty(record, &extraction.key_fields)?;

        let id = match extraction.entity {
            EntityKind::Customer => {
                if let Some(&idx) = self.customers_by_email.get(key) {
                    return Some(self.customers[idx].id);
                }
                let customer = Customer {
                    id: self.customers.len() as i64 + 1,
                    name: attribute(record, &extraction.name_fields),
                    email: key.to_string(),
                    phone: attribute(record, &extraction.phone_fields),
                };
                trace!(id = customer.id, email = %customer.email, "New customer");
                self.customers_by_email
                    .insert(customer.email.clone(), self.customers.len());
                self.customers.push(customer);
                self.customers.len() as i64
            }
            EntityKind::Product => {
                if let Some(&idx) = self.products_by_sku.get(key) {
                    return Some(self.products[idx].id);
                }
                let product = Product {
                    id: self.products.len() as i64 + 1,
                    sku: key.to_string(),
                    name: attribute(record, &extraction.name_fields),
                };
                trace!(id = product.id, sku = %product.sku, "New product");
                self.products_by_sku
                    .insert(product.sku.clone(), self.products.len());
                self.products.push(product);
                self.products.len() as i64
            }
        };

        Some(id)
    }

    /// Extracted customers in first-seen order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Extracted products in first-seen order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Clear both tables and restart ids at 1.
    pub fn reset(&mut self) {
        self.customers.clear();
        self.customers_by_email.clear();
        self.products.clear();
        self.products_by_sku.clear();
    }
}

fn first_non_empty<'r>(record: &'r Record, fields: &[String]) -> Option<&'r str> {
    fields
        .iter()
        .filter_map(|f| record.get_str(f))
        .find(|v| !v.is_empty())
}

fn attribute(record: &Record, fields: &[String]) -> String {
    first_non_empty(record, fields).unwrap_or_default().to_string()
}
