use crate::error::{AppError, AppResult};
use crate::rows;
use serde_json::{Map, Value};
use sqlx::{Executor, MySqlPool};
use std::time::Duration;

/// Tagged outcome of one practice statement. Exactly one of the two variants;
/// `row_count` always equals the length of `rows`.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Success {
        rows: Vec<Map<String, Value>>,
        row_count: usize,
    },
    Failure {
        message: String,
    },
}

/// Runs `sql` verbatim as a single unprepared statement against the practice
/// store. The caller must gate the text first; no re-validation happens here.
///
/// Statement errors from the store come back as `Failure` with the store's
/// own message and never propagate. Failing to obtain a connection at all is
/// a connectivity error and does propagate. Both the pool acquire and the
/// statement itself are bounded by `timeout`; a statement that exceeds it is
/// abandoned (the connection is discarded, not poisoned).
pub async fn execute(pool: &MySqlPool, sql: &str, timeout: Duration) -> AppResult<QueryOutcome> {
    let mut conn = tokio::time::timeout(timeout, pool.acquire())
        .await
        .map_err(|_| AppError::PoolTimeout)??;

    let result = tokio::time::timeout(timeout, (&mut *conn).fetch_all(sqlx::raw_sql(sql))).await;

    match result {
        Err(_) => Ok(QueryOutcome::Failure {
            message: format!("Query canceled after {} seconds", timeout.as_secs()),
        }),
        Ok(Err(sqlx::Error::Database(store_error))) => Ok(QueryOutcome::Failure {
            message: store_error.message().to_string(),
        }),
        Ok(Err(other)) => Err(AppError::Database(other)),
        Ok(Ok(result_rows)) => {
            let rows: Vec<Map<String, Value>> =
                result_rows.iter().map(rows::row_to_object).collect();
            let row_count = rows.len();
            Ok(QueryOutcome::Success { rows, row_count })
        }
    }
}
