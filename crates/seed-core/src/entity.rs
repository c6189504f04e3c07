//! Normalized entities extracted from denormalized records.

use crate::layout::{ColumnSpec, TableLayout};
use crate::types::SqlType;
use crate::values::{Record, Value};
use serde::{Deserialize, Serialize};

/// Table holding extracted customers.
pub const CUSTOMERS_TABLE: &str = "customers";

/// Table holding extracted products.
pub const PRODUCTS_TABLE: &str = "products_normalized";

/// Kind of normalized entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Customer, keyed by email
    Customer,
    /// Product, keyed by SKU
    Product,
}

impl EntityKind {
    /// Table the entity is stored in.
    pub fn table_name(&self) -> &'static str {
        match self {
            Self::Customer => CUSTOMERS_TABLE,
            Self::Product => PRODUCTS_TABLE,
        }
    }

    /// Foreign-key column attached to records referencing the entity.
    pub fn foreign_key_column(&self) -> &'static str {
        match self {
            Self::Customer => "customer_id",
            Self::Product => "product_id",
        }
    }

    /// Column layout of the entity table.
    pub fn layout(&self) -> TableLayout {
        let columns = match self {
            Self::Customer => vec![
                ColumnSpec::new("id", SqlType::Serial),
                ColumnSpec::new("name", SqlType::VarChar { length: 255 }).nullable(),
                ColumnSpec::new("email", SqlType::VarChar { length: 255 })
                    .nullable()
                    .unique(),
                ColumnSpec::new("phone", SqlType::VarChar { length: 50 }).nullable(),
            ],
            Self::Product => vec![
                ColumnSpec::new("id", SqlType::Serial),
                ColumnSpec::new("sku", SqlType::VarChar { length: 50 })
                    .nullable()
                    .unique(),
                ColumnSpec::new("name", SqlType::VarChar { length: 255 }).nullable(),
            ],
        };

        TableLayout {
            table_name: self.table_name().to_string(),
            columns,
        }
    }
}

/// A deduplicated customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Surrogate id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Email (dedup key)
    pub email: String,
    /// Phone number
    pub phone: String,
}

impl Customer {
    /// Row representation, including the surrogate id.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Int(self.id))
            .with("name", self.name.as_str())
            .with("email", self.email.as_str())
            .with("phone", self.phone.as_str())
    }
}

/// A deduplicated product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Surrogate id
    pub id: i64,
    /// SKU (dedup key)
    pub sku: String,
    /// Display name
    pub name: String,
}

impl Product {
    /// Row representation, including the surrogate id.
    pub fn to_record(&self) -> Record {
        Record::new()
            .with("id", Value::Int(self.id))
            .with("sku", self.sku.as_str())
            .with("name", self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_layouts() {
        let customers = EntityKind::Customer.layout();
        assert_eq!(customers.table_name, "customers");
        assert_eq!(customers.column_names(), vec!["id", "name", "email", "phone"]);
        assert!(customers.get_column("email").unwrap().unique);

        let products = EntityKind::Product.layout();
        assert_eq!(products.table_name, "products_normalized");
        assert_eq!(products.column_names(), vec!["id", "sku", "name"]);
        assert!(products.get_column("sku").unwrap().unique);
    }

    #[test]
    fn test_customer_record() {
        let customer = Customer {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
        };
        let record = customer.to_record();
        assert_eq!(record.get("id"), Some(&Value::Int(3)));
        assert_eq!(record.get_str("email"), Some("ada@example.com"));
        assert_eq!(record.get_str("phone"), Some(""));
    }
}
