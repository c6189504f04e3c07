//! Registry of the built-in schemas.
//!
//! The built-in registry is created on first use and never mutated
//! afterwards. Lookups are by schema name; listing preserves registration
//! order.

use crate::schema::{EntityExtraction, FieldDefinition, GeneratorConfig, Schema, SchemaError};
use crate::types::{DocType, SqlType};
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<SchemaRegistry> = LazyLock::new(|| SchemaRegistry::build(builtin_schemas()));

/// Ordered, name-indexed collection of schemas.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<Schema>,
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create a registry, validating every schema and rejecting duplicates.
    pub fn new(schemas: Vec<Schema>) -> Result<Self, SchemaError> {
        let mut seen = HashMap::new();
        for (idx, schema) in schemas.iter().enumerate() {
            schema.validate()?;
            if seen.insert(schema.name.clone(), idx).is_some() {
                return Err(SchemaError::DuplicateSchema(schema.name.clone()));
            }
        }
        Ok(Self::build(schemas))
    }

    fn build(schemas: Vec<Schema>) -> Self {
        let index = schemas
            .iter()
            .enumerate()
            .map(|(idx, schema)| (schema.name.clone(), idx))
            .collect();
        Self { schemas, index }
    }

    /// The built-in registry.
    pub fn builtin() -> &'static SchemaRegistry {
        &BUILTIN
    }

    /// Get a schema by name.
    pub fn get(&self, name: &str) -> Result<&Schema, SchemaError> {
        self.index
            .get(name)
            .and_then(|&idx| self.schemas.get(idx))
            .ok_or_else(|| SchemaError::UnknownSchema {
                name: name.to_string(),
                available: self.names().iter().map(|n| n.to_string()).collect(),
            })
    }

    /// Schema names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.schemas.iter().map(|s| s.name.as_str()).collect()
    }

    /// `(name, description)` pairs in registration order.
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.schemas
            .iter()
            .map(|s| (s.name.as_str(), s.description.as_str()))
            .collect()
    }

    /// Iterate over all schemas.
    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.iter()
    }
}

/// Get a built-in schema by name.
pub fn get_schema(name: &str) -> Result<&'static Schema, SchemaError> {
    SchemaRegistry::builtin().get(name)
}

/// `(name, description)` for every built-in schema.
pub fn list_schemas() -> Vec<(&'static str, &'static str)> {
    SchemaRegistry::builtin().list()
}

// ============================================================================
// Built-in schema definitions
// ============================================================================

const ORDER_STATUSES: &[&str] = &["pending", "processing", "shipped", "delivered", "cancelled"];
const MANUFACTURING_STATUSES: &[&str] =
    &["planned", "in_progress", "completed", "on_hold", "cancelled"];
const INVOICE_STATUSES: &[&str] = &["draft", "sent", "paid", "overdue", "cancelled"];
const PRIORITIES: &[&str] = &["low", "medium", "high", "urgent"];
const PAYMENT_METHODS: &[&str] = &[
    "credit_card",
    "debit_card",
    "bank_transfer",
    "paypal",
    "check",
    "cash",
];
const UNITS_OF_MEASURE: &[&str] = &["each", "box", "case", "pallet", "kg", "lb", "liter", "gallon"];
const CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Automotive",
    "Books",
    "Toys",
    "Health",
    "Food & Beverage",
    "Office Supplies",
];

fn field(name: &str, generator: GeneratorConfig, sql_type: SqlType, doc_type: DocType) -> FieldDefinition {
    FieldDefinition::new(name, generator, sql_type, doc_type)
}

fn varchar(length: u32) -> SqlType {
    SqlType::VarChar { length }
}

fn money() -> SqlType {
    SqlType::Decimal {
        precision: 12,
        scale: 2,
    }
}

fn id_field() -> FieldDefinition {
    field(
        "id",
        GeneratorConfig::IntRange { min: 1, max: 999_999 },
        SqlType::Serial,
        DocType::Integer,
    )
}

fn timestamp(name: &str) -> FieldDefinition {
    field(name, GeneratorConfig::Timestamp, SqlType::Timestamp, DocType::Date)
}

fn notes() -> FieldDefinition {
    field(
        "notes",
        GeneratorConfig::Paragraph { max_chars: 200 },
        SqlType::Text,
        DocType::Text,
    )
    .nullable()
}

fn contacts() -> Schema {
    Schema::new("contacts", "contacts", "Customer and business contacts", "created_at")
        .field(id_field())
        .field(field("first_name", GeneratorConfig::FirstName, varchar(100), DocType::Text))
        .field(field("last_name", GeneratorConfig::LastName, varchar(100), DocType::Text))
        .field(field("email", GeneratorConfig::Email, varchar(255), DocType::Keyword))
        .field(field("phone", GeneratorConfig::PhoneNumber, varchar(50), DocType::Keyword))
        .field(field("company", GeneratorConfig::Company, varchar(255), DocType::Text))
        .field(field("job_title", GeneratorConfig::JobTitle, varchar(255), DocType::Text))
        .field(field("address", GeneratorConfig::StreetAddress, varchar(255), DocType::Text))
        .field(field("city", GeneratorConfig::City, varchar(100), DocType::Keyword))
        .field(field("state", GeneratorConfig::StateAbbr, varchar(50), DocType::Keyword))
        .field(field("postal_code", GeneratorConfig::PostalCode, varchar(20), DocType::Keyword))
        .field(field("country", GeneratorConfig::Country, varchar(100), DocType::Keyword))
        .field(timestamp("created_at"))
        .field(timestamp("updated_at"))
}

fn sales_orders() -> Schema {
    Schema::new("sales_orders", "sales_orders", "Sales order records", "order_date")
        .field(id_field())
        .field(
            field(
                "order_number",
                GeneratorConfig::pattern("ORD-{hex:12}"),
                varchar(50),
                DocType::Keyword,
            )
            .unique(),
        )
        .field(field("customer_name", GeneratorConfig::FullName, varchar(255), DocType::Text))
        .field(field("customer_email", GeneratorConfig::Email, varchar(255), DocType::Keyword))
        .field(field(
            "customer_phone",
            GeneratorConfig::PhoneNumber,
            varchar(50),
            DocType::Keyword,
        ))
        .field(timestamp("order_date"))
        .field(timestamp("ship_date").nullable())
        .field(field(
            "status",
            GeneratorConfig::one_of(ORDER_STATUSES),
            varchar(50),
            DocType::Keyword,
        ))
        .field(field("subtotal", GeneratorConfig::money(10.0, 1000.0), money(), DocType::Float))
        .field(field("tax", GeneratorConfig::money(1.0, 100.0), money(), DocType::Float))
        .field(field("shipping", GeneratorConfig::money(5.0, 50.0), money(), DocType::Float))
        .field(field("total", GeneratorConfig::money(20.0, 1200.0), money(), DocType::Float))
        .field(field(
            "shipping_address",
            GeneratorConfig::StreetAddress,
            varchar(255),
            DocType::Text,
        ))
        .field(field("shipping_city", GeneratorConfig::City, varchar(100), DocType::Keyword))
        .field(field("shipping_state", GeneratorConfig::StateAbbr, varchar(50), DocType::Keyword))
        .field(field(
            "shipping_postal_code",
            GeneratorConfig::PostalCode,
            varchar(20),
            DocType::Keyword,
        ))
        .field(field(
            "payment_method",
            GeneratorConfig::one_of(PAYMENT_METHODS),
            varchar(50),
            DocType::Keyword,
        ))
        .field(notes())
        .field(timestamp("created_at"))
        .extracts(EntityExtraction::customer(
            "customer_email",
            "customer_name",
            "customer_phone",
        ))
}

fn manufacturing_orders() -> Schema {
    Schema::new(
        "manufacturing_orders",
        "manufacturing_orders",
        "Production work orders",
        "scheduled_start",
    )
    .field(id_field())
    .field(
        field(
            "work_order_number",
            GeneratorConfig::pattern("WO-{hex:12}"),
            varchar(50),
            DocType::Keyword,
        )
        .unique(),
    )
    .field(field("product_name", GeneratorConfig::CatchPhrase, varchar(255), DocType::Text))
    .field(field(
        "product_sku",
        GeneratorConfig::pattern("SKU-{hex:10}"),
        varchar(50),
        DocType::Keyword,
    ))
    .field(field(
        "quantity",
        GeneratorConfig::IntRange { min: 1, max: 1000 },
        SqlType::Integer,
        DocType::Integer,
    ))
    .field(field(
        "unit_of_measure",
        GeneratorConfig::one_of(UNITS_OF_MEASURE),
        varchar(50),
        DocType::Keyword,
    ))
    .field(timestamp("scheduled_start"))
    .field(timestamp("scheduled_end"))
    .field(timestamp("actual_start").nullable())
    .field(timestamp("actual_end").nullable())
    .field(field(
        "status",
        GeneratorConfig::one_of(MANUFACTURING_STATUSES),
        varchar(50),
        DocType::Keyword,
    ))
    .field(field(
        "priority",
        GeneratorConfig::one_of(PRIORITIES),
        varchar(20),
        DocType::Keyword,
    ))
    .field(field("assigned_to", GeneratorConfig::FullName, varchar(255), DocType::Text))
    .field(field(
        "work_center",
        GeneratorConfig::pattern("WC-{int:1:20:2}"),
        varchar(50),
        DocType::Keyword,
    ))
    .field(notes())
    .field(timestamp("created_at"))
    .extracts(EntityExtraction::product("product_sku", "product_name"))
}

fn products() -> Schema {
    Schema::new("products", "products", "Product catalog and inventory", "created_at")
        .field(id_field())
        .field(
            field(
                "sku",
                GeneratorConfig::pattern("SKU-{hex:10}"),
                varchar(50),
                DocType::Keyword,
            )
            .unique(),
        )
        .field(field("name", GeneratorConfig::CatchPhrase, varchar(255), DocType::Text))
        .field(field(
            "description",
            GeneratorConfig::Paragraph { max_chars: 500 },
            SqlType::Text,
            DocType::Text,
        ))
        .field(field(
            "category",
            GeneratorConfig::one_of(CATEGORIES),
            varchar(100),
            DocType::Keyword,
        ))
        .field(field("unit_price", GeneratorConfig::money(5.0, 500.0), money(), DocType::Float))
        .field(field("cost_price", GeneratorConfig::money(2.0, 300.0), money(), DocType::Float))
        .field(field(
            "quantity_on_hand",
            GeneratorConfig::IntRange { min: 0, max: 1000 },
            SqlType::Integer,
            DocType::Integer,
        ))
        .field(field(
            "reorder_level",
            GeneratorConfig::IntRange { min: 5, max: 100 },
            SqlType::Integer,
            DocType::Integer,
        ))
        .field(field("supplier_name", GeneratorConfig::Company, varchar(255), DocType::Text))
        .field(field(
            "supplier_contact",
            GeneratorConfig::Email,
            varchar(255),
            DocType::Keyword,
        ))
        .field(field(
            "is_active",
            GeneratorConfig::WeightedBool { true_weight: 0.9 },
            SqlType::Boolean,
            DocType::Boolean,
        ))
        .field(timestamp("created_at"))
        .field(timestamp("updated_at"))
}

fn invoices() -> Schema {
    Schema::new("invoices", "invoices", "Financial invoices and payments", "invoice_date")
        .field(id_field())
        .field(
            field(
                "invoice_number",
                GeneratorConfig::pattern("INV-{hex:12}"),
                varchar(50),
                DocType::Keyword,
            )
            .unique(),
        )
        .field(field("customer_name", GeneratorConfig::FullName, varchar(255), DocType::Text))
        .field(field("customer_email", GeneratorConfig::Email, varchar(255), DocType::Keyword))
        .field(timestamp("invoice_date"))
        .field(timestamp("due_date"))
        .field(field(
            "status",
            GeneratorConfig::one_of(INVOICE_STATUSES),
            varchar(50),
            DocType::Keyword,
        ))
        .field(field(
            "line_items_json",
            GeneratorConfig::LineItems {
                min_items: 1,
                max_items: 5,
            },
            SqlType::Text,
            DocType::Text,
        ))
        .field(field("subtotal", GeneratorConfig::money(50.0, 5000.0), money(), DocType::Float))
        .field(field(
            "tax_rate",
            GeneratorConfig::DecimalRange {
                min: 0.0,
                max: 0.15,
                scale: 4,
            },
            SqlType::Decimal {
                precision: 5,
                scale: 4,
            },
            DocType::Float,
        ))
        .field(field("tax_amount", GeneratorConfig::money(5.0, 500.0), money(), DocType::Float))
        .field(field("total", GeneratorConfig::money(55.0, 5500.0), money(), DocType::Float))
        .field(timestamp("payment_date").nullable())
        .field(
            field(
                "payment_method",
                GeneratorConfig::one_of(PAYMENT_METHODS),
                varchar(50),
                DocType::Keyword,
            )
            .nullable(),
        )
        .field(notes())
        .field(timestamp("created_at"))
        .extracts(EntityExtraction::customer(
            "customer_email",
            "customer_name",
            "customer_phone",
        ))
}

/// The built-in schemas in registration order.
pub fn builtin_schemas() -> Vec<Schema> {
    vec![
        contacts(),
        sales_orders(),
        manufacturing_orders(),
        products(),
        invoices(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityKind;

    #[test]
    fn test_builtin_schemas_are_valid() {
        let registry = SchemaRegistry::new(builtin_schemas()).unwrap();
        assert_eq!(registry.names(), SchemaRegistry::builtin().names());
    }

    #[test]
    fn test_list_schemas_order() {
        let names: Vec<&str> = list_schemas().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "contacts",
                "sales_orders",
                "manufacturing_orders",
                "products",
                "invoices"
            ]
        );
        // Listing is restartable and stable
        assert_eq!(list_schemas(), list_schemas());
    }

    #[test]
    fn test_get_schema() {
        let schema = get_schema("sales_orders").unwrap();
        assert_eq!(schema.table_name, "sales_orders");
        assert_eq!(schema.time_field, "order_date");
        assert!(schema.get_field("order_number").unwrap().unique);
        assert!(schema.get_field("ship_date").unwrap().nullable);
    }

    #[test]
    fn test_unknown_schema() {
        let err = get_schema("widgets").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownSchema { .. }));
        let message = err.to_string();
        assert!(message.contains("widgets"));
        assert!(message.contains("contacts"));
    }

    #[test]
    fn test_duplicate_schema_rejected() {
        let result = SchemaRegistry::new(vec![contacts(), contacts()]);
        assert!(matches!(result, Err(SchemaError::DuplicateSchema(_))));
    }

    #[test]
    fn test_entity_roles() {
        let kinds = |name: &str| -> Vec<EntityKind> {
            get_schema(name)
                .unwrap()
                .extractions
                .iter()
                .map(|e| e.entity)
                .collect()
        };

        assert_eq!(kinds("sales_orders"), vec![EntityKind::Customer]);
        assert_eq!(kinds("invoices"), vec![EntityKind::Customer]);
        assert_eq!(kinds("manufacturing_orders"), vec![EntityKind::Product]);
        assert!(kinds("contacts").is_empty());
        assert!(kinds("products").is_empty());
    }

    #[test]
    fn test_every_schema_has_serial_id() {
        for schema in SchemaRegistry::builtin().iter() {
            let id = schema.get_field("id").unwrap();
            assert!(id.sql_type.is_auto_increment(), "{}", schema.name);
        }
    }
}
