//! PostgreSQL DDL generation.

use seed_core::layout::ForeignKeyStyle;
use seed_core::{SqlType, ToDdl};

/// PostgreSQL DDL generator.
pub struct PostgresDdl;

impl PostgresDdl {
    /// TRUNCATE statement that also clears referencing tables.
    pub fn to_truncate(&self, table_name: &str) -> String {
        format!("TRUNCATE TABLE {} CASCADE", self.quote(table_name))
    }
}

impl ToDdl for PostgresDdl {
    fn to_ddl(&self, sql_type: &SqlType) -> String {
        match sql_type {
            SqlType::Serial => "SERIAL".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::VarChar { length } => format!("VARCHAR({length})"),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Decimal { precision, scale } => format!("NUMERIC({precision},{scale})"),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
        }
    }

    fn quote(&self, ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }

    fn foreign_key_style(&self) -> ForeignKeyStyle {
        ForeignKeyStyle::Inline
    }

    fn to_insert_ignore(&self, table_name: &str, columns: &[&str]) -> String {
        let names: Vec<String> = columns.iter().map(|c| self.quote(c)).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT DO NOTHING",
            self.quote(table_name),
            names.join(", "),
            placeholders.join(", ")
        )
    }

    fn to_drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {} CASCADE", self.quote(table_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::registry::get_schema;
    use seed_core::EntityKind;

    #[test]
    fn test_type_mapping() {
        let ddl = PostgresDdl;
        assert_eq!(ddl.to_ddl(&SqlType::Serial), "SERIAL");
        assert_eq!(ddl.to_ddl(&SqlType::VarChar { length: 50 }), "VARCHAR(50)");
        assert_eq!(
            ddl.to_ddl(&SqlType::Decimal {
                precision: 12,
                scale: 2
            }),
            "NUMERIC(12,2)"
        );
        assert_eq!(ddl.to_ddl(&SqlType::Timestamp), "TIMESTAMP");
    }

    #[test]
    fn test_create_flat_table() {
        let schema = get_schema("sales_orders").unwrap();
        let sql = PostgresDdl.to_create_table(&schema.layout(false));

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"sales_orders\" ("));
        assert!(sql.contains("\"id\" SERIAL PRIMARY KEY"));
        assert!(sql.contains("\"order_number\" VARCHAR(50) NOT NULL UNIQUE"));
        assert!(sql.contains("\"ship_date\" TIMESTAMP,"));
        assert!(sql.contains("\"customer_email\" VARCHAR(255) NOT NULL"));
        assert!(!sql.contains("REFERENCES"));
    }

    #[test]
    fn test_create_normalized_table() {
        let schema = get_schema("sales_orders").unwrap();
        let sql = PostgresDdl.to_create_table(&schema.layout(true));

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"sales_orders_normalized\" ("));
        assert!(sql.ends_with("\"customer_id\" INTEGER REFERENCES \"customers\"(\"id\"))"));
        assert!(!sql.contains("customer_email"));
    }

    #[test]
    fn test_entity_tables() {
        let sql = PostgresDdl.to_create_table(&EntityKind::Customer.layout());
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"customers\" (\"id\" SERIAL PRIMARY KEY, \
             \"name\" VARCHAR(255), \"email\" VARCHAR(255) UNIQUE, \"phone\" VARCHAR(50))"
        );
    }

    #[test]
    fn test_insert_and_maintenance_statements() {
        let ddl = PostgresDdl;
        assert_eq!(
            ddl.to_insert_ignore("t", &["a", "b"]),
            "INSERT INTO \"t\" (\"a\", \"b\") VALUES ($1, $2) ON CONFLICT DO NOTHING"
        );
        assert_eq!(ddl.to_drop_table("t"), "DROP TABLE IF EXISTS \"t\" CASCADE");
        assert_eq!(ddl.to_truncate("t"), "TRUNCATE TABLE \"t\" CASCADE");
        assert_eq!(ddl.to_count("t"), "SELECT COUNT(*) FROM \"t\"");
    }
}
