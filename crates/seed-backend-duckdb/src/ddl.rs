//! DuckDB DDL generation.

use seed_core::layout::ForeignKeyStyle;
use seed_core::{SqlType, ToDdl};

/// DuckDB DDL generator.
pub struct DuckDbDdl;

impl DuckDbDdl {
    /// Row deletion used for truncation.
    pub fn to_delete_all(&self, table_name: &str) -> String {
        format!("DELETE FROM {}", self.quote(table_name))
    }

    /// Highest id currently stored.
    pub fn to_max_id(&self, table_name: &str, id_column: &str) -> String {
        format!(
            "SELECT MAX({}) FROM {}",
            self.quote(id_column),
            self.quote(table_name)
        )
    }
}

impl ToDdl for DuckDbDdl {
    fn to_ddl(&self, sql_type: &SqlType) -> String {
        match sql_type {
            // Ids are assigned by the backend
            SqlType::Serial => "INTEGER".to_string(),
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::VarChar { length } => format!("VARCHAR({length})"),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Decimal { precision, scale } => format!("DECIMAL({precision},{scale})"),
            SqlType::Boolean => "BOOLEAN".to_string(),
            SqlType::Timestamp => "TIMESTAMP".to_string(),
        }
    }

    fn quote(&self, ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }

    fn foreign_key_style(&self) -> ForeignKeyStyle {
        ForeignKeyStyle::Omitted
    }

    fn to_insert_ignore(&self, table_name: &str, columns: &[&str]) -> String {
        let names: Vec<String> = columns.iter().map(|c| self.quote(c)).collect();
        let placeholders = vec!["?"; columns.len()];
        format!(
            "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
            self.quote(table_name),
            names.join(", "),
            placeholders.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seed_core::registry::get_schema;
    use seed_core::EntityKind;

    #[test]
    fn test_serial_becomes_plain_integer_key() {
        let sql = DuckDbDdl.to_create_table(&EntityKind::Customer.layout());
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"customers\" (\"id\" INTEGER PRIMARY KEY, \
             \"name\" VARCHAR(255), \"email\" VARCHAR(255) UNIQUE, \"phone\" VARCHAR(50))"
        );
    }

    #[test]
    fn test_foreign_keys_omitted() {
        let schema = get_schema("invoices").unwrap();
        let sql = DuckDbDdl.to_create_table(&schema.layout(true));

        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS \"invoices_normalized\" ("));
        assert!(sql.contains("\"customer_id\" INTEGER"));
        assert!(!sql.contains("REFERENCES"));
        assert!(!sql.contains("FOREIGN KEY"));
    }

    #[test]
    fn test_statements() {
        let ddl = DuckDbDdl;
        assert_eq!(
            ddl.to_insert_ignore("t", &["id", "x"]),
            "INSERT OR IGNORE INTO \"t\" (\"id\", \"x\") VALUES (?, ?)"
        );
        assert_eq!(ddl.to_delete_all("t"), "DELETE FROM \"t\"");
        assert_eq!(ddl.to_max_id("t", "id"), "SELECT MAX(\"id\") FROM \"t\"");
        assert_eq!(ddl.to_drop_table("t"), "DROP TABLE IF EXISTS \"t\"");
    }
}
