//! Schema definitions for seed data generation.
//!
//! A [`Schema`] is a static record shape: an ordered list of
//! [`FieldDefinition`]s, the designated time field, and the entity roles the
//! schema denormalizes ([`EntityExtraction`]). Schemas are built once at
//! process start and never mutated afterwards.

use crate::entity::EntityKind;
use crate::layout::{ColumnSpec, ForeignKey, TableLayout};
use crate::types::{DocType, SqlType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name of the primary key field every schema carries.
pub const ID_FIELD: &str = "id";

/// Suffix appended to a table name in normalized mode.
pub const NORMALIZED_SUFFIX: &str = "_normalized";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema not registered
    #[error("Unknown schema: {name}. Available: {}", available.join(", "))]
    UnknownSchema { name: String, available: Vec<String> },

    /// The designated time field is not one of the schema's fields
    #[error("Schema '{schema}' has no time field named '{field}'")]
    MissingTimeField { schema: String, field: String },

    /// The schema lacks the `id` primary key field
    #[error("Schema '{0}' has no 'id' field")]
    MissingIdField(String),

    /// Two fields share a name
    #[error("Field '{field}' is defined more than once in schema '{schema}'")]
    DuplicateField { schema: String, field: String },

    /// Two schemas share a name
    #[error("Schema '{0}' is registered more than once")]
    DuplicateSchema(String),
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Declarative value generator for a field.
///
/// Evaluated by the record generator against its fake-data context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Given name
    FirstName,
    /// Family name
    LastName,
    /// Given and family name
    FullName,
    /// Email address
    Email,
    /// Phone number
    PhoneNumber,
    /// Company name
    Company,
    /// Job title
    JobTitle,
    /// Street address line
    StreetAddress,
    /// City name
    City,
    /// Two-letter state code
    StateAbbr,
    /// Five-digit postal code
    PostalCode,
    /// Country name
    Country,
    /// Marketing-style phrase, also used for product names
    CatchPhrase,

    /// Sentences of filler text, at most `max_chars` long
    Paragraph { max_chars: usize },

    /// Pattern string with placeholders (`{index}`, `{hex:N}`, `{digits:N}`,
    /// `{int:MIN:MAX:WIDTH}`)
    Pattern { pattern: String },

    /// Random selection from a list
    OneOf { values: Vec<String> },

    /// Random integer in `[min, max]`
    IntRange { min: i64, max: i64 },

    /// Random decimal in `[min, max]` with `scale` fractional digits
    DecimalRange { min: f64, max: f64, scale: u32 },

    /// Boolean with configurable true probability
    WeightedBool { true_weight: f64 },

    /// JSON array of invoice line items
    LineItems { min_items: u32, max_items: u32 },

    /// Timestamp inside the generation window
    Timestamp,
}

impl GeneratorConfig {
    /// Shorthand for a [`GeneratorConfig::Pattern`].
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
        }
    }

    /// Shorthand for a [`GeneratorConfig::OneOf`].
    pub fn one_of(values: &[&str]) -> Self {
        Self::OneOf {
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Shorthand for a two-digit [`GeneratorConfig::DecimalRange`].
    pub fn money(min: f64, max: f64) -> Self {
        Self::DecimalRange { min, max, scale: 2 }
    }
}

// ============================================================================
// Field Definitions
// ============================================================================

/// Definition for a single field in a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name, unique within the schema
    pub name: String,

    /// Value generator
    pub generator: GeneratorConfig,

    /// SQL storage hint
    pub sql_type: SqlType,

    /// Document storage hint
    pub doc_type: DocType,

    /// Whether this field may be NULL
    #[serde(default)]
    pub nullable: bool,

    /// Whether values must be unique within the table
    #[serde(default)]
    pub unique: bool,
}

impl FieldDefinition {
    /// Create a new non-nullable, non-unique field.
    pub fn new(
        name: impl Into<String>,
        generator: GeneratorConfig,
        sql_type: SqlType,
        doc_type: DocType,
    ) -> Self {
        Self {
            name: name.into(),
            generator,
            sql_type,
            doc_type,
            nullable: false,
            unique: false,
        }
    }

    /// Mark the field nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark the field unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Column specification for this field.
    pub fn column(&self) -> ColumnSpec {
        ColumnSpec {
            name: self.name.clone(),
            sql_type: self.sql_type,
            nullable: self.nullable,
            unique: self.unique,
            references: None,
        }
    }
}

// ============================================================================
// Entity Extraction
// ============================================================================

/// An entity role denormalized into a schema's records.
///
/// Declares which record fields identify the entity, which fields feed its
/// attributes, and which fields are stripped from the record once the
/// entity has been extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityExtraction {
    /// Entity kind
    pub entity: EntityKind,

    /// Dedup key candidates; the first non-empty one wins
    pub key_fields: Vec<String>,

    /// Name attribute candidates
    pub name_fields: Vec<String>,

    /// Phone attribute candidates (customers only)
    #[serde(default)]
    pub phone_fields: Vec<String>,

    /// Fields removed from the record once the entity is attached
    pub strip_fields: Vec<String>,
}

impl EntityExtraction {
    /// Customer extraction keyed by an email field.
    pub fn customer(email_field: &str, name_field: &str, phone_field: &str) -> Self {
        Self {
            entity: EntityKind::Customer,
            key_fields: vec![email_field.to_string()],
            name_fields: vec![name_field.to_string()],
            phone_fields: vec![phone_field.to_string()],
            strip_fields: vec![
                name_field.to_string(),
                email_field.to_string(),
                phone_field.to_string(),
            ],
        }
    }

    /// Product extraction keyed by a SKU field, falling back to `sku`.
    pub fn product(sku_field: &str, name_field: &str) -> Self {
        Self {
            entity: EntityKind::Product,
            key_fields: vec![sku_field.to_string(), "sku".to_string()],
            name_fields: vec![name_field.to_string(), "name".to_string()],
            phone_fields: Vec::new(),
            strip_fields: vec![name_field.to_string(), sku_field.to_string()],
        }
    }

    /// Foreign-key column attached to normalized records.
    pub fn foreign_key_column(&self) -> &'static str {
        self.entity.foreign_key_column()
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Definition for a data schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name (registry key)
    pub name: String,

    /// Target table / index name
    pub table_name: String,

    /// Human description
    pub description: String,

    /// Name of the primary temporal field
    pub time_field: String,

    /// Ordered field definitions
    pub fields: Vec<FieldDefinition>,

    /// Entity roles this schema denormalizes
    #[serde(default)]
    pub extractions: Vec<EntityExtraction>,
}

impl Schema {
    /// Create a schema with no fields.
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        description: impl Into<String>,
        time_field: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            description: description.into(),
            time_field: time_field.into(),
            fields: Vec::new(),
            extractions: Vec::new(),
        }
    }

    /// Append a field.
    pub fn field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Declare an entity extraction.
    pub fn extracts(mut self, extraction: EntityExtraction) -> Self {
        self.extractions.push(extraction);
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Whether any entity can be extracted from this schema's records.
    pub fn is_normalizable(&self) -> bool {
        !self.extractions.is_empty()
    }

    /// Check the schema invariants.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    schema: self.name.clone(),
                    field: field.name.clone(),
                });
            }
        }

        if !seen.contains(ID_FIELD) {
            return Err(SchemaError::MissingIdField(self.name.clone()));
        }

        if !seen.contains(self.time_field.as_str()) {
            return Err(SchemaError::MissingTimeField {
                schema: self.name.clone(),
                field: self.time_field.clone(),
            });
        }

        Ok(())
    }

    /// Table the records land in.
    pub fn target_table(&self, normalized: bool) -> String {
        if normalized {
            format!("{}{NORMALIZED_SUFFIX}", self.table_name)
        } else {
            self.table_name.clone()
        }
    }

    /// Concrete column layout for flat or normalized mode.
    ///
    /// In normalized mode every stripped field is removed and one nullable
    /// integer foreign-key column per extraction is appended.
    pub fn layout(&self, normalized: bool) -> TableLayout {
        let mut columns: Vec<ColumnSpec> = self.fields.iter().map(|f| f.column()).collect();

        if normalized {
            for extraction in &self.extractions {
                columns.retain(|c| !extraction.strip_fields.contains(&c.name));
                columns.push(ColumnSpec {
                    name: extraction.foreign_key_column().to_string(),
                    sql_type: SqlType::Integer,
                    nullable: true,
                    unique: false,
                    references: Some(ForeignKey {
                        table: extraction.entity.table_name().to_string(),
                        column: ID_FIELD.to_string(),
                    }),
                });
            }
        }

        TableLayout {
            table_name: self.target_table(normalized),
            columns,
        }
    }

    /// Search-engine index mapping for this schema.
    pub fn es_mapping(&self) -> serde_json::Value {
        let properties: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.doc_type.mapping_property()))
            .collect();

        serde_json::json!({ "mappings": { "properties": properties } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders_schema() -> Schema {
        Schema::new("orders", "orders", "Test orders", "order_date")
            .field(FieldDefinition::new(
                "id",
                GeneratorConfig::IntRange { min: 1, max: 999_999 },
                SqlType::Serial,
                DocType::Integer,
            ))
            .field(
                FieldDefinition::new(
                    "order_number",
                    GeneratorConfig::pattern("ORD-{hex:12}"),
                    SqlType::VarChar { length: 50 },
                    DocType::Keyword,
                )
                .unique(),
            )
            .field(FieldDefinition::new(
                "customer_name",
                GeneratorConfig::FullName,
                SqlType::VarChar { length: 255 },
                DocType::Text,
            ))
            .field(FieldDefinition::new(
                "customer_email",
                GeneratorConfig::Email,
                SqlType::VarChar { length: 255 },
                DocType::Keyword,
            ))
            .field(FieldDefinition::new(
                "customer_phone",
                GeneratorConfig::PhoneNumber,
                SqlType::VarChar { length: 50 },
                DocType::Keyword,
            ))
            .field(FieldDefinition::new(
                "order_date",
                GeneratorConfig::Timestamp,
                SqlType::Timestamp,
                DocType::Date,
            ))
            .field(
                FieldDefinition::new(
                    "notes",
                    GeneratorConfig::Paragraph { max_chars: 200 },
                    SqlType::Text,
                    DocType::Text,
                )
                .nullable(),
            )
            .extracts(EntityExtraction::customer(
                "customer_email",
                "customer_name",
                "customer_phone",
            ))
    }

    #[test]
    fn test_validate_ok() {
        assert!(orders_schema().validate().is_ok());
    }

    #[test]
    fn test_validate_missing_time_field() {
        let mut schema = orders_schema();
        schema.time_field = "shipped_at".to_string();
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::MissingTimeField { .. })
        ));
    }

    #[test]
    fn test_validate_missing_id() {
        let mut schema = orders_schema();
        schema.fields.retain(|f| f.name != "id");
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::MissingIdField(_))
        ));
    }

    #[test]
    fn test_validate_duplicate_field() {
        let schema = orders_schema().field(FieldDefinition::new(
            "notes",
            GeneratorConfig::Paragraph { max_chars: 10 },
            SqlType::Text,
            DocType::Text,
        ));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_flat_layout_keeps_all_fields() {
        let schema = orders_schema();
        let layout = schema.layout(false);

        assert_eq!(layout.table_name, "orders");
        assert_eq!(layout.column_names(), schema.field_names());
        assert!(layout.columns.iter().all(|c| c.references.is_none()));
    }

    #[test]
    fn test_normalized_layout_strips_and_appends_foreign_key() {
        let layout = orders_schema().layout(true);

        assert_eq!(layout.table_name, "orders_normalized");
        assert_eq!(
            layout.column_names(),
            vec!["id", "order_number", "order_date", "notes", "customer_id"]
        );

        let fk = layout.columns.last().unwrap();
        assert_eq!(fk.sql_type, SqlType::Integer);
        assert!(fk.nullable);
        let reference = fk.references.as_ref().unwrap();
        assert_eq!(reference.table, "customers");
        assert_eq!(reference.column, "id");
    }

    #[test]
    fn test_es_mapping() {
        let mapping = orders_schema().es_mapping();
        let props = &mapping["mappings"]["properties"];

        assert_eq!(props["order_number"]["type"], "keyword");
        assert_eq!(props["customer_name"]["type"], "text");
        assert_eq!(props["customer_name"]["fields"]["keyword"]["type"], "keyword");
        assert_eq!(props["order_date"]["type"], "date");
        assert_eq!(props["id"]["type"], "integer");
    }
}
