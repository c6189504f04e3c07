//! Conflict-skipping INSERT logic for MySQL.

use crate::ddl::MySqlDdl;
use crate::error::MySqlBackendError;
use chrono::{Datelike, NaiveDateTime, Timelike};
use mysql_async::{prelude::*, Conn, Params, TxOpts, Value as MySqlValue};
use seed_core::{ColumnSpec, Record, SqlType, TableLayout, ToDdl, Value};

/// Insert records into `layout`'s table with `INSERT IGNORE`, one statement
/// per record in a single transaction.
///
/// Absent fields are bound as NULL. Returns the number of rows actually
/// inserted, so duplicates of a UNIQUE column are not counted.
pub async fn insert_records(
    conn: &mut Conn,
    layout: &TableLayout,
    records: &[Record],
    include_keys: bool,
) -> Result<u64, MySqlBackendError> {
    if records.is_empty() {
        return Ok(0);
    }

    let columns = layout.insert_columns(include_keys);
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let sql = MySqlDdl.to_insert_ignore(&layout.table_name, &names);

    let mut tx = conn.start_transaction(TxOpts::default()).await?;
    let statement = tx.prep(&sql).await?;

    let mut inserted = 0;
    for record in records {
        let params = record_params(&columns, record)?;
        tx.exec_drop(&statement, Params::Positional(params)).await?;
        inserted += tx.affected_rows();
    }

    tx.commit().await?;
    Ok(inserted)
}

/// Bind every column of `record` in order.
pub fn record_params(
    columns: &[&ColumnSpec],
    record: &Record,
) -> Result<Vec<MySqlValue>, MySqlBackendError> {
    columns
        .iter()
        .map(|column| to_param(column, record.get(&column.name)))
        .collect()
}

/// Convert a value to a MySQL parameter after the column's SQL hint.
pub fn to_param(column: &ColumnSpec, value: Option<&Value>) -> Result<MySqlValue, MySqlBackendError> {
    let param = match (column.sql_type, value) {
        (_, None) => MySqlValue::NULL,

        (SqlType::Serial | SqlType::Integer, Some(Value::Int(i))) => MySqlValue::Int(*i),
        (SqlType::VarChar { .. } | SqlType::Text, Some(Value::Text(s))) => {
            MySqlValue::Bytes(s.as_bytes().to_vec())
        }
        (SqlType::Decimal { .. }, Some(Value::Decimal(d))) => {
            MySqlValue::Bytes(d.to_string().into_bytes())
        }
        (SqlType::Decimal { .. }, Some(Value::Int(i))) => MySqlValue::Bytes(i.to_string().into_bytes()),
        (SqlType::Boolean, Some(Value::Bool(b))) => MySqlValue::Int(i64::from(*b)),
        (SqlType::Timestamp, Some(Value::Timestamp(ts))) => {
            to_datetime(ts).ok_or_else(|| mismatch(column, value))?
        }

        _ => return Err(mismatch(column, value)),
    };
    Ok(param)
}

fn to_datetime(ts: &NaiveDateTime) -> Option<MySqlValue> {
    let year = u16::try_from(ts.year()).ok()?;
    Some(MySqlValue::Date(
        year,
        ts.month() as u8,
        ts.day() as u8,
        ts.hour() as u8,
        ts.minute() as u8,
        ts.second() as u8,
        0,
    ))
}

fn mismatch(column: &ColumnSpec, value: Option<&Value>) -> MySqlBackendError {
    MySqlBackendError::TypeMismatch {
        column: column.name.clone(),
        sql_type: column.sql_type,
        value: format!("{value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_value_mapping() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 30, 15)
            .unwrap();
        let column = |t| ColumnSpec::new("c", t);

        assert_eq!(
            to_param(&column(SqlType::Integer), Some(&Value::Int(7))).unwrap(),
            MySqlValue::Int(7)
        );
        assert_eq!(
            to_param(&column(SqlType::Boolean), Some(&Value::Bool(true))).unwrap(),
            MySqlValue::Int(1)
        );
        assert_eq!(
            to_param(
                &column(SqlType::Decimal {
                    precision: 12,
                    scale: 2
                }),
                Some(&Value::Decimal(Decimal::new(1999, 2)))
            )
            .unwrap(),
            MySqlValue::Bytes(b"19.99".to_vec())
        );
        assert_eq!(
            to_param(&column(SqlType::Timestamp), Some(&Value::Timestamp(ts))).unwrap(),
            MySqlValue::Date(2024, 5, 1, 8, 30, 15, 0)
        );
        assert_eq!(to_param(&column(SqlType::Text), None).unwrap(), MySqlValue::NULL);
    }

    #[test]
    fn test_mismatched_value_rejected() {
        let column = ColumnSpec::new("active", SqlType::Boolean);
        let err = to_param(&column, Some(&Value::text("yes"))).unwrap_err();
        assert!(matches!(err, MySqlBackendError::TypeMismatch { .. }));
    }

    #[test]
    fn test_record_params_follow_columns() {
        let layout = seed_core::EntityKind::Customer.layout();
        let record = Record::new()
            .with("id", 3i64)
            .with("email", "a@example.com");

        let params = record_params(&layout.insert_columns(true), &record).unwrap();
        assert_eq!(params.len(), layout.columns.len());
        assert_eq!(params[0], MySqlValue::Int(3));
    }
}
