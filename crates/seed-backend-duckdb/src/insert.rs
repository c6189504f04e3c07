//! Conflict-skipping INSERT logic for DuckDB.

use crate::ddl::DuckDbDdl;
use crate::error::DuckDbBackendError;
use duckdb::types::{TimeUnit, Value as DuckValue};
use duckdb::{params_from_iter, Connection};
use rust_decimal::prelude::ToPrimitive;
use seed_core::{ColumnSpec, Record, SqlType, TableLayout, ToDdl, Value};

/// Insert records into `layout`'s table with `INSERT OR IGNORE`, one
/// statement per record in a single transaction.
///
/// Every column is written, the id included; records must already carry
/// their ids. Returns the number of rows actually inserted.
pub fn insert_records(
    conn: &mut Connection,
    layout: &TableLayout,
    records: &[Record],
) -> Result<u64, DuckDbBackendError> {
    if records.is_empty() {
        return Ok(0);
    }

    let columns = layout.insert_columns(true);
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let sql = DuckDbDdl.to_insert_ignore(&layout.table_name, &names);

    let tx = conn.transaction()?;
    let mut inserted = 0;
    {
        let mut statement = tx.prepare(&sql)?;
        for record in records {
            let params = record_params(&columns, record)?;
            inserted += statement.execute(params_from_iter(params.iter()))? as u64;
        }
    }
    tx.commit()?;
    Ok(inserted)
}

/// Bind every column of `record` in order.
pub fn record_params(
    columns: &[&ColumnSpec],
    record: &Record,
) -> Result<Vec<DuckValue>, DuckDbBackendError> {
    columns
        .iter()
        .map(|column| to_param(column, record.get(&column.name)))
        .collect()
}

/// Convert a value to a DuckDB parameter after the column's SQL hint.
pub fn to_param(column: &ColumnSpec, value: Option<&Value>) -> Result<DuckValue, DuckDbBackendError> {
    let param = match (column.sql_type, value) {
        (_, None) => DuckValue::Null,

        (SqlType::Serial | SqlType::Integer, Some(Value::Int(i))) => DuckValue::BigInt(*i),
        (SqlType::VarChar { .. } | SqlType::Text, Some(Value::Text(s))) => DuckValue::Text(s.clone()),
        (SqlType::Decimal { .. }, Some(Value::Decimal(d))) => {
            DuckValue::Double(d.to_f64().ok_or_else(|| mismatch(column, value))?)
        }
        (SqlType::Decimal { .. }, Some(Value::Int(i))) => DuckValue::Double(*i as f64),
        (SqlType::Boolean, Some(Value::Bool(b))) => DuckValue::Boolean(*b),
        (SqlType::Timestamp, Some(Value::Timestamp(ts))) => {
            DuckValue::Timestamp(TimeUnit::Microsecond, ts.and_utc().timestamp_micros())
        }

        _ => return Err(mismatch(column, value)),
    };
    Ok(param)
}

fn mismatch(column: &ColumnSpec, value: Option<&Value>) -> DuckDbBackendError {
    DuckDbBackendError::TypeMismatch {
        column: column.name.clone(),
        sql_type: column.sql_type,
        value: format!("{value:?}"),
    }
}
