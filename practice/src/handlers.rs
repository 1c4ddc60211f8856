use crate::error::AppError;
use crate::executor::QueryOutcome;
use crate::gateway::PracticeGateway;
use actix_web::{web, HttpResponse, Result};
use sqlcamp_types::{
    ExecuteQueryRequest, ExecuteQueryResponse, PracticeErrorResponse, SampleQueriesResponse,
    SchemaResponse,
};
use std::sync::Arc;
use std::time::SystemTime;

pub struct AppState {
    pub gateway: Arc<PracticeGateway>,
    pub start_time: SystemTime,
}

pub async fn health_check(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let uptime = data
        .start_time
        .elapsed()
        .map_err(|e| AppError::Internal(format!("Failed to calculate uptime: {e}")))?
        .as_secs();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": uptime,
    })))
}

pub async fn execute_query(
    data: web::Data<AppState>,
    request: web::Json<ExecuteQueryRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    match data.gateway.run_query(&req.query).await? {
        QueryOutcome::Success { rows, row_count } => {
            Ok(HttpResponse::Ok().json(ExecuteQueryResponse {
                success: true,
                results: rows,
                row_count,
            }))
        }
        QueryOutcome::Failure { message } => {
            tracing::debug!("practice statement refused or failed: {}", message);
            Ok(HttpResponse::BadRequest().json(PracticeErrorResponse::new(message)))
        }
    }
}

pub async fn get_schema(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let schema = data.gateway.get_schema().await?;

    Ok(HttpResponse::Ok().json(SchemaResponse {
        success: true,
        schema,
    }))
}

pub async fn get_sample_queries(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(SampleQueriesResponse {
        success: true,
        queries: data.gateway.get_samples(),
    }))
}
