//! Record generator producing schema-shaped records.

use crate::context::FakeData;
use crate::window::DateWindow;
use chrono::Duration;
use seed_core::schema::ID_FIELD;
use seed_core::{Record, Schema, SqlType, Value};

/// Maximum number of whole days a secondary timestamp trails the time field.
const MAX_OFFSET_DAYS: i64 = 30;

/// Probability, in tenths, that a nullable field comes out NULL.
const NULL_TENTHS: i64 = 2;

/// Record generator for a single schema.
///
/// Uses the explicit [`FakeData`] context, so generating with the same
/// schema, window and seed is reproducible.
pub struct RecordGenerator<'a> {
    /// Schema defining the fields and their generators
    schema: &'a Schema,
    /// Bounds for the time field
    window: DateWindow,
    /// Seeded fake-data context
    fake: FakeData,
    /// Number of records generated so far
    index: u64,
}

impl<'a> RecordGenerator<'a> {
    /// Create a generator for `schema` over `window`, seeded with `seed`.
    pub fn new(schema: &'a Schema, window: DateWindow, seed: u64) -> Self {
        Self {
            schema,
            window,
            fake: FakeData::new(seed),
            index: 0,
        }
    }

    /// Schema this generator produces records for.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Window bounding the time field.
    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    /// Seed the generator was created with.
    pub fn seed(&self) -> u64 {
        self.fake.seed()
    }

    /// Number of records generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate one record.
    ///
    /// Fields are visited in schema order:
    /// - an auto-increment `id` is left to the backend;
    /// - the time field is drawn uniformly from the window;
    /// - other timestamp fields trail the time field by 0 to 30 whole days,
    ///   or come from the window when the time field has not been set yet;
    /// - everything else comes from the field's generator.
    ///
    /// A nullable field is then dropped with probability 20%.
    pub fn generate_record(&mut self) -> Record {
        let index = self.index;
        let time_field = self.schema.time_field.as_str();
        let mut record = Record::new();

        for field in &self.schema.fields {
            if field.name == ID_FIELD && field.sql_type.is_auto_increment() {
                continue;
            }

            let value = if field.name == time_field {
                Value::Timestamp(self.window.sample(self.fake.rng()))
            } else if field.sql_type == SqlType::Timestamp {
                match record.get(time_field).and_then(Value::as_timestamp).copied() {
                    Some(base) => {
                        let offset = self.fake.int(0, MAX_OFFSET_DAYS);
                        Value::Timestamp(base + Duration::days(offset))
                    }
                    None => Value::Timestamp(self.window.sample(self.fake.rng())),
                }
            } else {
                self.fake.generate(&field.generator, index, &self.window)
            };

            if field.nullable && self.fake.int(1, 10) <= NULL_TENTHS {
                continue;
            }

            record.insert(field.name.clone(), value);
        }

        self.index += 1;
        record
    }

    /// Generate `count` records.
    pub fn generate_batch(&mut self, count: usize) -> Vec<Record> {
        (0..count).map(|_| self.generate_record()).collect()
    }

    /// Lazily generate `total` records in batches of at most `batch_size`.
    ///
    /// Every batch except possibly the last holds exactly `batch_size`
    /// records. A `batch_size` of zero yields no batches.
    pub fn generate_batches(&mut self, total: usize, batch_size: usize) -> BatchIterator<'_, 'a> {
        BatchIterator {
            generator: self,
            remaining: if batch_size == 0 { 0 } else { total },
            batch_size,
        }
    }
}

/// Iterator that lazily generates batches of records.
pub struct BatchIterator<'g, 'a> {
    generator: &'g mut RecordGenerator<'a>,
    remaining: usize,
    batch_size: usize,
}

impl Iterator for BatchIterator<'_, '_> {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let size = self.batch_size.min(self.remaining);
        self.remaining -= size;
        Some(self.generator.generate_batch(size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let batches = if self.batch_size == 0 {
            0
        } else {
            self.remaining.div_ceil(self.batch_size)
        };
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for BatchIterator<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seed_core::registry::{get_schema, SchemaRegistry};
    use seed_core::{DocType, FieldDefinition, GeneratorConfig};

    fn window() -> DateWindow {
        DateWindow::from_dates(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_time_field_inside_window() {
        for schema in SchemaRegistry::builtin().iter() {
            let mut generator = RecordGenerator::new(schema, window(), 42);
            for record in generator.generate_batch(200) {
                let ts = record
                    .get(&schema.time_field)
                    .and_then(Value::as_timestamp)
                    .unwrap();
                assert!(window().contains(ts), "{}: {ts}", schema.name);
            }
        }
    }

    #[test]
    fn test_required_fields_present_and_id_omitted() {
        for schema in SchemaRegistry::builtin().iter() {
            let mut generator = RecordGenerator::new(schema, window(), 7);
            for record in generator.generate_batch(100) {
                assert!(!record.contains("id"), "{}", schema.name);
                for field in schema.fields.iter().filter(|f| f.name != "id") {
                    if !field.nullable {
                        assert!(record.contains(&field.name), "{}.{}", schema.name, field.name);
                    }
                }
            }
        }
    }

    #[test]
    fn test_secondary_timestamps_trail_time_field() {
        let schema = get_schema("manufacturing_orders").unwrap();
        let mut generator = RecordGenerator::new(schema, window(), 11);

        for record in generator.generate_batch(200) {
            let base = *record
                .get("scheduled_start")
                .and_then(Value::as_timestamp)
                .unwrap();
            for name in ["scheduled_end", "actual_start", "actual_end", "created_at"] {
                if let Some(ts) = record.get(name).and_then(Value::as_timestamp) {
                    let offset = *ts - base;
                    assert!(offset >= Duration::zero());
                    assert!(offset <= Duration::days(30));
                    assert_eq!(offset.num_seconds() % 86_400, 0);
                }
            }
        }
    }

    #[test]
    fn test_updated_at_trails_created_at() {
        let schema = get_schema("contacts").unwrap();
        let mut generator = RecordGenerator::new(schema, window(), 3);
        for record in generator.generate_batch(50) {
            let updated = record.get("updated_at").and_then(Value::as_timestamp).unwrap();
            let created = record.get("created_at").and_then(Value::as_timestamp).unwrap();
            assert!(*updated >= *created);
        }
    }

    #[test]
    fn test_timestamp_before_time_field_uses_window() {
        let schema = Schema::new("shipments", "shipments", "Shipments", "delivered_at")
            .field(FieldDefinition::new(
                "id",
                GeneratorConfig::IntRange { min: 1, max: 1 },
                SqlType::Serial,
                DocType::Integer,
            ))
            .field(FieldDefinition::new(
                "packed_at",
                GeneratorConfig::Timestamp,
                SqlType::Timestamp,
                DocType::Date,
            ))
            .field(FieldDefinition::new(
                "delivered_at",
                GeneratorConfig::Timestamp,
                SqlType::Timestamp,
                DocType::Date,
            ));

        let mut generator = RecordGenerator::new(&schema, window(), 9);
        for record in generator.generate_batch(100) {
            let packed = record.get("packed_at").and_then(Value::as_timestamp).unwrap();
            assert!(window().contains(packed));
        }
    }

    #[test]
    fn test_nullable_fields_sometimes_absent() {
        let schema = get_schema("sales_orders").unwrap();
        let mut generator = RecordGenerator::new(schema, window(), 42);
        let records = generator.generate_batch(500);

        let missing = records.iter().filter(|r| !r.contains("notes")).count();
        assert!(missing > 0 && missing < 500);
        assert!(missing < 250);
    }

    #[test]
    fn test_batches_split() {
        let schema = get_schema("contacts").unwrap();
        let mut generator = RecordGenerator::new(schema, window(), 42);

        let batches = generator.generate_batches(25, 10);
        assert_eq!(batches.len(), 3);
        let sizes: Vec<usize> = batches.map(|b| b.len()).collect();
        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(generator.current_index(), 25);
    }

    #[test]
    fn test_batches_edge_cases() {
        let schema = get_schema("contacts").unwrap();
        let mut generator = RecordGenerator::new(schema, window(), 42);

        assert_eq!(generator.generate_batches(0, 10).count(), 0);
        assert_eq!(generator.generate_batches(25, 0).count(), 0);
        let sizes: Vec<usize> = generator.generate_batches(3, 10).map(|b| b.len()).collect();
        assert_eq!(sizes, vec![3]);
    }

    #[test]
    fn test_deterministic_generation() {
        let schema = get_schema("invoices").unwrap();
        let mut a = RecordGenerator::new(schema, window(), 1234);
        let mut b = RecordGenerator::new(schema, window(), 1234);
        let mut c = RecordGenerator::new(schema, window(), 4321);

        let first = a.generate_batch(20);
        assert_eq!(first, b.generate_batch(20));
        assert_ne!(first, c.generate_batch(20));
    }

    #[test]
    fn test_non_serial_id_is_generated() {
        let schema = Schema::new("events", "events", "Events", "at")
            .field(FieldDefinition::new(
                "id",
                GeneratorConfig::IntRange { min: 1, max: 10 },
                SqlType::Integer,
                DocType::Integer,
            ))
            .field(FieldDefinition::new(
                "at",
                GeneratorConfig::Timestamp,
                SqlType::Timestamp,
                DocType::Date,
            ));

        let mut generator = RecordGenerator::new(&schema, window(), 5);
        let record = generator.generate_record();
        let id = record.get("id").and_then(Value::as_i64).unwrap();
        assert!((1..=10).contains(&id));
    }

    #[test]
    fn test_pattern_index_counts_records() {
        let schema = Schema::new("users", "users", "Users", "joined")
            .field(FieldDefinition::new(
                "id",
                GeneratorConfig::IntRange { min: 1, max: 1 },
                SqlType::Serial,
                DocType::Integer,
            ))
            .field(FieldDefinition::new(
                "handle",
                GeneratorConfig::pattern("user_{index}"),
                SqlType::VarChar { length: 50 },
                DocType::Keyword,
            ))
            .field(FieldDefinition::new(
                "joined",
                GeneratorConfig::Timestamp,
                SqlType::Timestamp,
                DocType::Date,
            ));

        let mut generator = RecordGenerator::new(&schema, window(), 5);
        let handles: Vec<String> = generator
            .generate_batch(3)
            .iter()
            .map(|r| r.get_str("handle").unwrap().to_string())
            .collect();
        assert_eq!(handles, vec!["user_0", "user_1", "user_2"]);
    }
}
