use crate::{DbError, DependentStore, Result as DbErrorResult};

use hr_core::{DependentRecord, EmployeeId};

use std::panic::Location;

use async_trait::async_trait;
use base64::{Engine, prelude::BASE64_STANDARD};
use error_location::ErrorLocation;
use serde_json::{Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo, ValueRef};

const SELECT_BY_EMPLOYEE: &str = "SELECT * FROM dependents WHERE employee_id = ?";

/// SQLite-backed `DependentStore`
#[derive(Clone)]
pub struct DependentRepository {
    pool: SqlitePool,
}

impl DependentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> DbErrorResult<Vec<DependentRecord>> {
        let query = sqlx::query(SELECT_BY_EMPLOYEE);
        let query = match employee_id {
            EmployeeId::Integer(id) => query.bind(*id),
            EmployeeId::Text(id) => query.bind(id.as_str()),
        };

        let rows = query.fetch_all(&self.pool).await?;

        rows.iter().map(row_to_record).collect()
    }
}

#[async_trait]
impl DependentStore for DependentRepository {
    async fn find_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> DbErrorResult<Vec<DependentRecord>> {
        DependentRepository::find_by_employee(self, employee_id).await
    }
}

/// Convert a row into a column-ordered record, typing each value by its
/// SQLite storage class.
fn row_to_record(row: &SqliteRow) -> DbErrorResult<DependentRecord> {
    let mut record = DependentRecord::new();

    for column in row.columns() {
        let ordinal = column.ordinal();
        let raw = row.try_get_raw(ordinal)?;

        let value = if raw.is_null() {
            Value::Null
        } else {
            let storage_class = raw.type_info().name().to_owned();
            match storage_class.as_str() {
                "INTEGER" => Value::from(row.try_get::<i64, _>(ordinal)?),
                // NaN and infinities have no JSON form
                "REAL" => Number::from_f64(row.try_get::<f64, _>(ordinal)?)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                "TEXT" => Value::String(row.try_get::<String, _>(ordinal)?),
                "BLOB" => {
                    Value::String(BASE64_STANDARD.encode(row.try_get::<Vec<u8>, _>(ordinal)?))
                }
                other => {
                    return Err(DbError::Decode {
                        column: column.name().to_string(),
                        storage_class: other.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        };

        record.insert(column.name(), value);
    }

    Ok(record)
}
