//! Outcome of a seeding session.

use seed_backend::ConnectionInfo;
use std::fmt;
use std::time::Duration;

/// Summary of a completed seeding session.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Canonical backend name
    pub backend: String,
    /// Schema that was seeded
    pub schema: String,
    /// Table or index the records went into
    pub table: String,
    /// Rows persisted by this session
    pub inserted: u64,
    /// Rows in the target table afterwards
    pub final_count: u64,
    /// Number of batches inserted
    pub batches: u64,
    /// Distinct customers extracted
    pub customers: usize,
    /// Distinct products extracted
    pub products: usize,
    /// Whether records were normalized
    pub normalized: bool,
    /// Non-fatal issues, e.g. a normalization fallback
    pub warnings: Vec<String>,
    /// Where the data can be reached
    pub connection: ConnectionInfo,
    /// Seed of the fake-data context
    pub seed: u64,
    /// Time spent generating and normalizing
    pub generation_duration: Duration,
    /// Time spent inserting
    pub insert_duration: Duration,
    /// Wall time of the session
    pub total_duration: Duration,
}

impl SeedReport {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for warning in &self.warnings {
            writeln!(f, "Warning: {warning}")?;
        }
        if self.customers > 0 {
            writeln!(f, "  Created {} unique customers", self.customers)?;
        }
        if self.products > 0 {
            writeln!(f, "  Created {} unique products", self.products)?;
        }
        writeln!(
            f,
            "Inserted {} records into '{}' table",
            self.inserted, self.table
        )?;
        writeln!(f, "  Total records in table: {}", self.final_count)?;
        write!(f, "  Seed: {}", self.seed)?;

        if !self.connection.is_empty() {
            write!(f, "\n\nConnection info:")?;
            for (key, value) in self.connection.display_lines() {
                if key == "connect_cmd" {
                    write!(f, "\n\nConnect with:\n  {value}")?;
                } else {
                    write!(f, "\n  {key}: {value}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let report = SeedReport {
            table: "sales_orders_normalized".to_string(),
            inserted: 50,
            final_count: 50,
            customers: 5,
            seed: 7,
            connection: ConnectionInfo {
                database: Some("seed.duckdb".to_string()),
                connect_cmd: Some("duckdb seed.duckdb".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let text = report.to_string();
        assert!(text.contains("Created 5 unique customers"));
        assert!(!text.contains("unique products"));
        assert!(text.contains("Inserted 50 records into 'sales_orders_normalized' table"));
        assert!(text.contains("  database: seed.duckdb"));
        assert!(text.ends_with("Connect with:\n  duckdb seed.duckdb"));
    }

    #[test]
    fn test_rows_per_second() {
        let report = SeedReport {
            inserted: 100,
            total_duration: Duration::from_secs(2),
            ..Default::default()
        };
        assert_eq!(report.rows_per_second(), 50.0);
        assert_eq!(SeedReport::default().rows_per_second(), 0.0);
    }
}
