use crate::error::AppResult;
use crate::rows;
use serde_json::{Map, Value};
use sqlcamp_types::ColumnDescriptor;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use std::collections::BTreeMap;

/// Lists every table in the practice store and describes its columns in the
/// store's natural column order. All-or-nothing: if enumeration or any
/// per-table describe fails, the whole fetch fails; no partial schema is
/// returned. Nothing is cached; each call re-queries the store.
pub async fn describe_schema(
    pool: &MySqlPool,
) -> AppResult<BTreeMap<String, Vec<ColumnDescriptor>>> {
    let mut conn = pool.acquire().await?;

    let tables = sqlx::raw_sql("SHOW TABLES").fetch_all(&mut *conn).await?;

    let mut schema = BTreeMap::new();
    for table_row in &tables {
        let table: String = table_row.try_get(0)?;
        let statement = format!("DESCRIBE `{}`", table.replace('`', "``"));
        let columns = sqlx::raw_sql(&statement).fetch_all(&mut *conn).await?;

        let descriptors = columns.iter().map(descriptor_from_row).collect();
        schema.insert(table, descriptors);
    }

    Ok(schema)
}

fn descriptor_from_row(row: &MySqlRow) -> ColumnDescriptor {
    let object = rows::row_to_object(row);

    ColumnDescriptor {
        field: string_field(&object, "Field"),
        column_type: string_field(&object, "Type"),
        null: string_field(&object, "Null"),
        key: string_field(&object, "Key"),
        default: object
            .get("Default")
            .and_then(Value::as_str)
            .map(str::to_string),
        extra: string_field(&object, "Extra"),
    }
}

fn string_field(object: &Map<String, Value>, name: &str) -> String {
    object
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
