//! `_bulk` request bodies and responses.

use crate::error::ElasticsearchBackendError;
use seed_core::Record;
use serde::Deserialize;
use serde_json::{json, Map, Value as JsonValue};

/// JSON document for a record.
///
/// Timestamps become ISO 8601 strings, which the default `date` mapping
/// accepts.
pub fn to_document(record: &Record) -> JsonValue {
    let fields: Map<String, JsonValue> = record
        .iter()
        .map(|(name, value)| (name.clone(), value.to_json()))
        .collect();
    JsonValue::Object(fields)
}

/// NDJSON body indexing every record into `index`.
///
/// Each record contributes an action line and a source line; the body ends
/// with a newline as the API requires.
pub fn build_bulk_body(index: &str, records: &[Record]) -> Result<String, ElasticsearchBackendError> {
    let action = serde_json::to_string(&json!({ "index": { "_index": index } }))?;

    let mut body = String::new();
    for record in records {
        body.push_str(&action);
        body.push('\n');
        body.push_str(&serde_json::to_string(&to_document(record))?);
        body.push('\n');
    }
    Ok(body)
}

/// Response of the `_bulk` endpoint.
#[derive(Debug, Deserialize)]
pub struct BulkResponse {
    /// Whether any item failed
    pub errors: bool,
    #[serde(default)]
    pub items: Vec<BulkItem>,
}

/// Per-document outcome.
#[derive(Debug, Deserialize)]
pub struct BulkItem {
    pub index: Option<BulkItemResult>,
}

#[derive(Debug, Deserialize)]
pub struct BulkItemResult {
    #[serde(default)]
    pub status: u16,
    pub error: Option<JsonValue>,
}

impl BulkResponse {
    /// Number of documents indexed out of `submitted`.
    pub fn count_indexed(&self, submitted: usize) -> u64 {
        if !self.errors {
            return submitted as u64;
        }
        self.items
            .iter()
            .filter(|item| matches!(&item.index, Some(result) if result.error.is_none()))
            .count() as u64
    }

    /// Error payloads of the failed items.
    pub fn failures(&self) -> impl Iterator<Item = &JsonValue> {
        self.items
            .iter()
            .filter_map(|item| item.index.as_ref().and_then(|r| r.error.as_ref()))
    }
}

/// Response of the `_count` endpoint.
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    #[serde(default)]
    pub count: u64,
}

/// Response of `_cluster/health`.
#[derive(Debug, Deserialize)]
pub struct ClusterHealth {
    pub status: String,
}

impl ClusterHealth {
    /// Green and yellow clusters accept writes.
    pub fn is_usable(&self) -> bool {
        matches!(self.status.as_str(), "green" | "yellow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use seed_core::Value;

    #[test]
    fn test_bulk_body_lines() {
        let ts = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(23, 0, 5)
            .unwrap();
        let records = vec![
            Record::new().with("email", "a@example.com").with("created_at", ts),
            Record::new().with("email", "b@example.com"),
        ];

        let body = build_bulk_body("contacts", &records).unwrap();
        assert!(body.ends_with('\n'));

        let lines: Vec<JsonValue> = body
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], json!({ "index": { "_index": "contacts" } }));
        assert_eq!(
            lines[1],
            json!({ "email": "a@example.com", "created_at": "2024-02-29T23:00:05" })
        );
        assert_eq!(lines[2], lines[0]);
        assert_eq!(lines[3], json!({ "email": "b@example.com" }));
    }

    #[test]
    fn test_document_values() {
        let record = Record::new()
            .with("quantity", 4i64)
            .with("is_active", Value::Bool(false));
        assert_eq!(
            to_document(&record),
            json!({ "quantity": 4, "is_active": false })
        );
    }

    #[test]
    fn test_count_indexed_without_errors() {
        let response: BulkResponse =
            serde_json::from_value(json!({ "took": 3, "errors": false, "items": [] })).unwrap();
        assert_eq!(response.count_indexed(10), 10);
    }

    #[test]
    fn test_count_indexed_partial_failure() {
        let response: BulkResponse = serde_json::from_value(json!({
            "took": 5,
            "errors": true,
            "items": [
                { "index": { "_index": "invoices", "status": 201 } },
                { "index": { "_index": "invoices", "status": 400,
                             "error": { "type": "mapper_parsing_exception" } } },
                { "index": { "_index": "invoices", "status": 201 } }
            ]
        }))
        .unwrap();

        assert_eq!(response.count_indexed(3), 2);
        let failures: Vec<&JsonValue> = response.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0]["type"], "mapper_parsing_exception");
    }

    #[test]
    fn test_cluster_health() {
        for (status, usable) in [("green", true), ("yellow", true), ("red", false)] {
            let health: ClusterHealth =
                serde_json::from_value(json!({ "cluster_name": "c", "status": status })).unwrap();
            assert_eq!(health.is_usable(), usable);
        }

        let count: CountResponse = serde_json::from_value(json!({ "count": 42 })).unwrap();
        assert_eq!(count.count, 42);
    }
}
