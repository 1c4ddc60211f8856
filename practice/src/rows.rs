use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Map, Value};
use sqlx::mysql::MySqlRow;
use sqlx::types::BigDecimal;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Converts one store row into an ordered field-name -> scalar mapping.
/// The column set is determined per query at runtime, so there is no fixed
/// record type; insertion order follows the store's column order.
pub fn row_to_object(row: &MySqlRow) -> Map<String, Value> {
    let mut object = Map::new();
    for (idx, column) in row.columns().iter().enumerate() {
        object.insert(column.name().to_string(), column_value(row, idx));
    }
    object
}

/// Decodes a single column into a JSON scalar based on the store's declared
/// type. Anything unrecognized degrades to its textual form rather than
/// failing the whole row.
pub fn column_value(row: &MySqlRow, idx: usize) -> Value {
    let is_null = row
        .try_get_raw(idx)
        .map(|value| value.is_null())
        .unwrap_or(true);
    if is_null {
        return Value::Null;
    }

    match row.columns()[idx].type_info().name() {
        "BOOLEAN" => row
            .try_get::<bool, _>(idx)
            .map(Value::Bool)
            .unwrap_or_else(|_| text_value(row, idx)),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => row
            .try_get::<i64, _>(idx)
            .map(Value::from)
            .unwrap_or_else(|_| text_value(row, idx)),
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<u64, _>(idx)
            .map(Value::from)
            .unwrap_or_else(|_| text_value(row, idx)),
        "FLOAT" => row
            .try_get::<f32, _>(idx)
            .map(|value| Value::from(f64::from(value)))
            .unwrap_or_else(|_| text_value(row, idx)),
        "DOUBLE" => row
            .try_get::<f64, _>(idx)
            .map(Value::from)
            .unwrap_or_else(|_| text_value(row, idx)),
        // MySQL transmits DECIMAL as text; kept as a string to preserve
        // precision, the same way the common client drivers report it.
        "DECIMAL" => row
            .try_get::<BigDecimal, _>(idx)
            .map(|value| Value::String(value.to_string()))
            .unwrap_or_else(|_| text_value(row, idx)),
        "DATE" => row
            .try_get::<NaiveDate, _>(idx)
            .map(|value| Value::String(value.format("%Y-%m-%d").to_string()))
            .unwrap_or_else(|_| text_value(row, idx)),
        "TIME" => row
            .try_get::<NaiveTime, _>(idx)
            .map(|value| Value::String(value.format("%H:%M:%S").to_string()))
            .unwrap_or_else(|_| text_value(row, idx)),
        "DATETIME" | "TIMESTAMP" => row
            .try_get::<NaiveDateTime, _>(idx)
            .map(|value| Value::String(value.format("%Y-%m-%d %H:%M:%S").to_string()))
            .unwrap_or_else(|_| text_value(row, idx)),
        _ => text_value(row, idx),
    }
}

fn text_value(row: &MySqlRow, idx: usize) -> Value {
    if let Ok(text) = row.try_get::<String, _>(idx) {
        return Value::String(text);
    }
    row.try_get::<Vec<u8>, _>(idx)
        .map(|bytes| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        .unwrap_or(Value::Null)
}
