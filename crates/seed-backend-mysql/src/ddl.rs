//! MySQL DDL generation.

use seed_core::layout::ForeignKeyStyle;
use seed_core::{SqlType, ToDdl};

/// Disables foreign-key checks for the session.
pub const FK_CHECKS_OFF: &str = "SET FOREIGN_KEY_CHECKS = 0";

/// Re-enables foreign-key checks for the session.
pub const FK_CHECKS_ON: &str = "SET FOREIGN_KEY_CHECKS = 1";

/// MySQL DDL generator.
pub struct MySqlDdl;

impl MySqlDdl {
    /// TRUNCATE statement.
    pub fn to_truncate(&self, table_name: &str) -> String {
        format!("TRUNCATE TABLE {}", self.quote(table_name))
    }
}

impl ToDdl for MySqlDdl {
    fn to_ddl(&self, sql_type: &SqlType) -> String {
        match sql_type {
            SqlType::Serial => "INT AUTO_INCREMENT".to_string(),
            SqlType::Integer => "INT".to_string(),
            SqlType::VarChar { length } => format!("VARCHAR({length})"),
            SqlType::Text => "TEXT".to_string(),
            SqlType::Decimal { precision, scale } => format!("DECIMAL({precision},{scale})"),
            SqlType::Boolean => "BOOLEAN".to_string(),
            // DATETIME avoids TIMESTAMP's 2038 limit and implicit time-zone conversion
            SqlType::Timestamp => "DATETIME".to_string(),
        }
    }

    fn quote(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn foreign_key_style(&self) -> ForeignKeyStyle {
        ForeignKeyStyle::TableConstraint
    }

    fn table_options(&self) -> Option<&'static str> {
        Some("ENGINE=InnoDB")
    }

    fn to_insert_ignore(&self, table_name: &str, columns: &[&str]) -> String {
        let names: Vec<String> = columns.iter().map(|c| self.quote(c)).collect();
        let placeholders = vec!["?"; columns.len()];
        format!(
            "INSERT IGNORE INTO {} ({}) VALUES ({})",
            self.quote(table_name),
            names.join(", "),
            placeholders.join(", ")
        )
    }
}
