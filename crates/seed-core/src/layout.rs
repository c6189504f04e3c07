//! Table layouts and DDL derivation.
//!
//! A [`TableLayout`] is the concrete column list a SQL backend materialises
//! for a schema. Each backend implements [`ToDdl`] for its dialect; the
//! default methods assemble complete statements from the per-type mapping.

use crate::types::SqlType;
use serde::{Deserialize, Serialize};

/// Reference from a column to another table's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    /// Referenced table
    pub table: String,
    /// Referenced column
    pub column: String,
}

/// A single column of a table layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name
    pub name: String,
    /// SQL storage hint
    pub sql_type: SqlType,
    /// Whether NULL is allowed
    pub nullable: bool,
    /// Whether a UNIQUE constraint applies
    pub unique: bool,
    /// Foreign-key target, if any
    pub references: Option<ForeignKey>,
}

impl ColumnSpec {
    /// Create a non-null column.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: false,
            unique: false,
            references: None,
        }
    }

    /// Mark the column nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Mark the column unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// Concrete table: name plus ordered columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    /// Table name
    pub table_name: String,
    /// Ordered columns
    pub columns: Vec<ColumnSpec>,
}

impl TableLayout {
    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// All column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Columns written by an INSERT.
    ///
    /// Auto-increment columns are skipped unless the caller supplies key
    /// values itself (`include_keys`).
    pub fn insert_columns(&self, include_keys: bool) -> Vec<&ColumnSpec> {
        self.columns
            .iter()
            .filter(|c| include_keys || !c.sql_type.is_auto_increment())
            .collect()
    }

    /// Whether the layout has an auto-increment key column.
    pub fn has_auto_key(&self) -> bool {
        self.columns.iter().any(|c| c.sql_type.is_auto_increment())
    }
}

/// How a dialect renders foreign-key references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKeyStyle {
    /// `col INTEGER REFERENCES t(id)`
    Inline,
    /// `col INT, ..., FOREIGN KEY (col) REFERENCES t(id)`
    TableConstraint,
    /// Plain reference column, no constraint
    Omitted,
}

/// Trait for generating DDL and DML statements in a SQL dialect.
pub trait ToDdl {
    /// Convert a SQL hint to a dialect type string.
    ///
    /// For [`SqlType::Serial`] this is the auto-increment column type; the
    /// `PRIMARY KEY` modifier is appended by [`ToDdl::column_definition`].
    fn to_ddl(&self, sql_type: &SqlType) -> String;

    /// Quote an identifier.
    fn quote(&self, ident: &str) -> String;

    /// How foreign keys are rendered.
    fn foreign_key_style(&self) -> ForeignKeyStyle;

    /// Conflict-skipping INSERT template for the given columns.
    fn to_insert_ignore(&self, table_name: &str, columns: &[&str]) -> String;

    /// Trailing table options (e.g. storage engine).
    fn table_options(&self) -> Option<&'static str> {
        None
    }

    /// Column definition for one column.
    fn column_definition(&self, column: &ColumnSpec) -> String {
        let name = self.quote(&column.name);
        let ty = self.to_ddl(&column.sql_type);

        if column.sql_type.is_auto_increment() {
            return format!("{name} {ty} PRIMARY KEY");
        }

        let mut def = format!("{name} {ty}");
        if !column.nullable {
            def.push_str(" NOT NULL");
        }
        if column.unique {
            def.push_str(" UNIQUE");
        }
        if let (Some(fk), ForeignKeyStyle::Inline) = (&column.references, self.foreign_key_style())
        {
            def.push_str(&format!(
                " REFERENCES {}({})",
                self.quote(&fk.table),
                self.quote(&fk.column)
            ));
        }
        def
    }

    /// Generate an idempotent CREATE TABLE statement.
    fn to_create_table(&self, layout: &TableLayout) -> String {
        let mut defs: Vec<String> = layout
            .columns
            .iter()
            .map(|c| self.column_definition(c))
            .collect();

        if self.foreign_key_style() == ForeignKeyStyle::TableConstraint {
            for column in &layout.columns {
                if let Some(fk) = &column.references {
                    defs.push(format!(
                        "FOREIGN KEY ({}) REFERENCES {}({})",
                        self.quote(&column.name),
                        self.quote(&fk.table),
                        self.quote(&fk.column)
                    ));
                }
            }
        }

        let mut sql = format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.quote(&layout.table_name),
            defs.join(", ")
        );
        if let Some(options) = self.table_options() {
            sql.push(' ');
            sql.push_str(options);
        }
        sql
    }

    /// Generate a DROP TABLE statement.
    fn to_drop_table(&self, table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {}", self.quote(table_name))
    }

    /// Generate a row-count query.
    fn to_count(&self, table_name: &str) -> String {
        format!("SELECT COUNT(*) FROM {}", self.quote(table_name))
    }
}
