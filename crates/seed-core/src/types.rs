//! Storage-type hints carried by field definitions.
//!
//! `SqlType` is the engine-neutral SQL hint. Each SQL backend maps it to its
//! own dialect through [`crate::ToDdl`]. `DocType` is the hint used by the
//! document/search backend to build index mappings.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// SQL storage hint for a field.
///
/// The uniqueness modifier is not part of the type; it lives on the
/// field definition (see [`crate::FieldDefinition::unique`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SqlType {
    /// Auto-incrementing integer primary key.
    Serial,

    /// 32-bit integer.
    Integer,

    /// Variable-length string with a maximum length.
    VarChar {
        /// Maximum length in characters
        length: u32,
    },

    /// Unbounded text.
    Text,

    /// Exact decimal.
    Decimal {
        /// Total number of digits
        precision: u8,
        /// Digits after the decimal point
        scale: u8,
    },

    /// Boolean.
    Boolean,

    /// Timestamp without time zone.
    Timestamp,
}

impl SqlType {
    /// Whether values of this type are assigned by the storage engine.
    pub fn is_auto_increment(&self) -> bool {
        matches!(self, Self::Serial)
    }

    /// Whether this hint denotes a timestamp column.
    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp)
    }

    /// Whether this hint holds integer values (including serial keys).
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Serial | Self::Integer)
    }
}

impl std::fmt::Display for SqlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serial => write!(f, "SERIAL"),
            Self::Integer => write!(f, "INTEGER"),
            Self::VarChar { length } => write!(f, "VARCHAR({length})"),
            Self::Text => write!(f, "TEXT"),
            Self::Decimal { precision, scale } => write!(f, "DECIMAL({precision},{scale})"),
            Self::Boolean => write!(f, "BOOLEAN"),
            Self::Timestamp => write!(f, "TIMESTAMP"),
        }
    }
}

/// Document/search storage hint for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// Full-text field with a `keyword` sub-field.
    Text,
    /// Exact-match string.
    Keyword,
    /// Date/time.
    Date,
    /// Integer.
    Integer,
    /// Floating point.
    Float,
    /// Boolean.
    Boolean,
}

impl DocType {
    /// Name of the hint as used by the search engine.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Keyword => "keyword",
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
        }
    }

    /// Mapping property for this hint.
    pub fn mapping_property(&self) -> serde_json::Value {
        match self {
            Self::Text => json!({
                "type": "text",
                "fields": { "keyword": { "type": "keyword" } }
            }),
            other => json!({ "type": other.as_str() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_type_flags() {
        assert!(SqlType::Serial.is_auto_increment());
        assert!(!SqlType::Integer.is_auto_increment());
        assert!(SqlType::Timestamp.is_timestamp());
        assert!(SqlType::Serial.is_integer());
        assert!(!SqlType::Text.is_integer());
    }

    #[test]
    fn test_sql_type_display() {
        assert_eq!(SqlType::VarChar { length: 50 }.to_string(), "VARCHAR(50)");
        assert_eq!(
            SqlType::Decimal {
                precision: 12,
                scale: 2
            }
            .to_string(),
            "DECIMAL(12,2)"
        );
    }

    #[test]
    fn test_text_mapping_has_keyword_subfield() {
        let prop = DocType::Text.mapping_property();
        assert_eq!(prop["type"], "text");
        assert_eq!(prop["fields"]["keyword"]["type"], "keyword");

        assert_eq!(DocType::Date.mapping_property(), json!({ "type": "date" }));
    }
}
