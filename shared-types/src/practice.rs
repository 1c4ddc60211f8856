use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use ts_rs::TS;

// ============ SQL Practice Sandbox ============

/// Request to run one statement against the practice database
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteQueryRequest {
    pub query: String,
}

/// Successful execution: rows in store order, columns in store column order
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExecuteQueryResponse {
    pub success: bool,
    #[ts(type = "Array<Record<string, any>>")]
    pub results: Vec<Map<String, Value>>,
    #[serde(rename = "rowCount")]
    pub row_count: usize,
}

/// Failure envelope shared by all practice endpoints
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PracticeErrorResponse {
    pub success: bool,
    pub error: String,
}

impl PracticeErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// One column of one practice table, in MySQL `DESCRIBE` vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColumnDescriptor {
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Type")]
    pub column_type: String,
    #[serde(rename = "Null")]
    pub null: String,
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Default")]
    pub default: Option<String>,
    #[serde(rename = "Extra")]
    pub extra: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SchemaResponse {
    pub success: bool,
    pub schema: BTreeMap<String, Vec<ColumnDescriptor>>,
}

/// A ready-to-run example query shown in the practice editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SampleQuery {
    pub title: String,
    pub query: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SampleQueriesResponse {
    pub success: bool,
    pub queries: Vec<SampleQuery>,
}
