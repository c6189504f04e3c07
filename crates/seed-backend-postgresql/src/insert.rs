//! Conflict-skipping INSERT logic for PostgreSQL.

use crate::ddl::PostgresDdl;
use crate::error::PostgresBackendError;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use seed_core::{ColumnSpec, Record, SqlType, TableLayout, ToDdl, Value};
use tokio_postgres::types::ToSql;
use tokio_postgres::Client;

/// Boxed statement parameter.
pub type SqlParam = Box<dyn ToSql + Sync + Send>;

/// Insert records into `layout`'s table, one statement per record in a
/// single transaction.
///
/// Columns come from the layout, not from the records: absent fields are
/// bound as typed NULLs. With `include_keys` the auto-increment `id` column
/// is written as well. Returns the number of rows actually inserted.
pub async fn insert_records(
    client: &mut Client,
    layout: &TableLayout,
    records: &[Record],
    include_keys: bool,
) -> Result<u64, PostgresBackendError> {
    if records.is_empty() {
        return Ok(0);
    }

    let columns = layout.insert_columns(include_keys);
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    let sql = PostgresDdl.to_insert_ignore(&layout.table_name, &names);

    let transaction = client.transaction().await?;
    let statement = transaction.prepare(&sql).await?;

    let mut inserted = 0;
    for record in records {
        let params = record_params(&columns, record)?;
        let param_refs: Vec<&(dyn ToSql + Sync)> = params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect();
        inserted += transaction.execute(&statement, &param_refs).await?;
    }

    transaction.commit().await?;
    Ok(inserted)
}

/// Bind every column of `record` in order.
pub fn record_params(
    columns: &[&ColumnSpec],
    record: &Record,
) -> Result<Vec<SqlParam>, PostgresBackendError> {
    columns
        .iter()
        .map(|column| to_param(column, record.get(&column.name)))
        .collect()
}

/// Convert a value to a parameter typed after the column's SQL hint.
pub fn to_param(column: &ColumnSpec, value: Option<&Value>) -> Result<SqlParam, PostgresBackendError> {
    let param: SqlParam = match (column.sql_type, value) {
        (SqlType::Serial | SqlType::Integer, None) => Box::new(None::<i32>),
        (SqlType::Serial | SqlType::Integer, Some(Value::Int(i))) => {
            let v = i32::try_from(*i).map_err(|_| mismatch(column, value))?;
            Box::new(v)
        }

        (SqlType::VarChar { .. } | SqlType::Text, None) => Box::new(None::<String>),
        (SqlType::VarChar { .. } | SqlType::Text, Some(Value::Text(s))) => Box::new(s.clone()),

        (SqlType::Decimal { .. }, None) => Box::new(None::<Decimal>),
        (SqlType::Decimal { .. }, Some(Value::Decimal(d))) => Box::new(*d),
        (SqlType::Decimal { .. }, Some(Value::Int(i))) => Box::new(Decimal::from(*i)),

        (SqlType::Boolean, None) => Box::new(None::<bool>),
        (SqlType::Boolean, Some(Value::Bool(b))) => Box::new(*b),

        (SqlType::Timestamp, None) => Box::new(None::<NaiveDateTime>),
        (SqlType::Timestamp, Some(Value::Timestamp(ts))) => Box::new(*ts),

        _ => return Err(mismatch(column, value)),
    };
    Ok(param)
}

fn mismatch(column: &ColumnSpec, value: Option<&Value>) -> PostgresBackendError {
    PostgresBackendError::TypeMismatch {
        column: column.name.clone(),
        sql_type: column.sql_type,
        value: format!("{value:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_typed_params() {
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let ok = [
            (SqlType::Integer, Some(Value::Int(7))),
            (SqlType::Integer, None),
            (SqlType::Text, Some(Value::text("x"))),
            (SqlType::VarChar { length: 5 }, None),
            (
                SqlType::Decimal {
                    precision: 12,
                    scale: 2,
                },
                Some(Value::Decimal(Decimal::new(1999, 2))),
            ),
            (SqlType::Boolean, Some(Value::Bool(true))),
            (SqlType::Timestamp, Some(Value::Timestamp(ts))),
            (SqlType::Timestamp, None),
        ];

        for (sql_type, value) in ok {
            let column = ColumnSpec::new("c", sql_type);
            assert!(to_param(&column, value.as_ref()).is_ok(), "{sql_type}");
        }
    }

    #[test]
    fn test_mismatched_value_rejected() {
        let column = ColumnSpec::new("quantity", SqlType::Integer);
        let err = to_param(&column, Some(&Value::text("ten"))).err().unwrap();
        assert!(matches!(err, PostgresBackendError::TypeMismatch { .. }));

        let too_big = Value::Int(i64::from(i32::MAX) + 1);
        assert!(to_param(&column, Some(&too_big)).is_err());
    }

    #[test]
    fn test_record_params_follow_columns() {
        let layout = TableLayout {
            table_name: "t".to_string(),
            columns: vec![
                ColumnSpec::new("id", SqlType::Serial),
                ColumnSpec::new("name", SqlType::Text).nullable(),
                ColumnSpec::new("qty", SqlType::Integer),
            ],
        };
        let record = Record::new().with("qty", 3i64);

        let params = record_params(&layout.insert_columns(false), &record).unwrap();
        assert_eq!(params.len(), 2);
    }
}
