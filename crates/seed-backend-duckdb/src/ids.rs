//! Backend-assigned surrogate ids.

use seed_core::schema::ID_FIELD;
use seed_core::{Record, Value};
use std::collections::HashMap;

/// Per-table id counters.
///
/// A counter starts at `MAX(id) + 1` of the table the first time the table
/// is written and then advances for every record handed out, whether or
/// not the row survives the conflict check.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: HashMap<String, i64>,
}

impl IdAllocator {
    /// Create an allocator with no counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `table` already has a counter.
    pub fn is_seeded(&self, table: &str) -> bool {
        self.next.contains_key(table)
    }

    /// Start the counter for `table` after `max_id` (an empty table starts at 1).
    pub fn seed(&mut self, table: &str, max_id: Option<i64>) {
        self.next
            .insert(table.to_string(), max_id.unwrap_or(0).max(0) + 1);
    }

    /// Next id `table` would hand out.
    pub fn peek(&self, table: &str) -> Option<i64> {
        self.next.get(table).copied()
    }

    /// Give every record without an id the next id of `table`.
    ///
    /// Records that already carry an id are left alone.
    pub fn assign(&mut self, table: &str, records: &mut [Record]) {
        let next = self.next.entry(table.to_string()).or_insert(1);
        for record in records.iter_mut().filter(|r| !r.contains(ID_FIELD)) {
            record.insert(ID_FIELD, Value::Int(*next));
            *next += 1;
        }
    }

    /// Drop the counter of `table`.
    pub fn forget(&mut self, table: &str) {
        self.next.remove(table);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[Record]) -> Vec<i64> {
        records
            .iter()
            .filter_map(|r| r.get(ID_FIELD).and_then(Value::as_i64))
            .collect()
    }

    #[test]
    fn test_counter_continues_across_batches() {
        let mut ids_alloc = IdAllocator::new();
        ids_alloc.seed("contacts", Some(41));

        let mut first = vec![Record::new(), Record::new()];
        ids_alloc.assign("contacts", &mut first);
        let mut second = vec![Record::new()];
        ids_alloc.assign("contacts", &mut second);

        assert_eq!(ids(&first), vec![42, 43]);
        assert_eq!(ids(&second), vec![44]);
        assert_eq!(ids_alloc.peek("contacts"), Some(45));
    }

    #[test]
    fn test_existing_ids_kept() {
        let mut ids_alloc = IdAllocator::new();
        ids_alloc.seed("customers", None);

        let mut records = vec![Record::new().with("id", 7i64), Record::new()];
        ids_alloc.assign("customers", &mut records);
        assert_eq!(ids(&records), vec![7, 1]);
    }

    #[test]
    fn test_forget_resets_counter() {
        let mut ids_alloc = IdAllocator::new();
        ids_alloc.seed("t", Some(10));
        assert!(ids_alloc.is_seeded("t"));

        ids_alloc.forget("t");
        assert!(!ids_alloc.is_seeded("t"));
        assert_eq!(ids_alloc.peek("t"), None);
    }
}
