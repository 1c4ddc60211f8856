use crate::auth;
use crate::certificates::{self, AwardOutcome, TOTAL_TOPICS};
use crate::database::Database;
use crate::error::AppError;
use actix_web::{web, HttpResponse, Result};
use sqlcamp_types::{
    LoginRequest, MarkCompletedRequest, MessageResponse, ProgressResponse, RegisterRequest,
    SaveQuizScoreRequest, SaveQuizScoreResponse, UserRecord,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::SystemTime;

pub struct AppState {
    pub database: Arc<Database>,
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

pub async fn register(
    data: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    if req.name.trim().is_empty() {
        return Err(AppError::InvalidRequest("Name cannot be empty".to_string()));
    }
    if req.email.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Email cannot be empty".to_string(),
        ));
    }
    if req.password.is_empty() {
        return Err(AppError::InvalidRequest(
            "Password cannot be empty".to_string(),
        ));
    }

    let password_hash = auth::hash_password(&req.password)?;
    let user_id = data
        .database
        .create_user(&req.name, &req.email, &password_hash)
        .await?;

    let user = data
        .database
        .get_user_record(user_id)
        .await?
        .ok_or_else(|| AppError::Internal("registered user not found".to_string()))?;

    Ok(HttpResponse::Created().json(user))
}

pub async fn login(
    data: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    let user = data
        .database
        .get_user_auth_by_email(&req.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !auth::verify_password(&req.password, &user.password)? {
        return Err(AppError::InvalidCredentials);
    }

    Ok(HttpResponse::Ok().json(UserRecord {
        id: user.id,
        name: user.name,
        email: user.email,
        progress: user.progress,
    }))
}

pub async fn get_progress(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();

    let completed_topics = data.database.completed_topics(user_id).await?;
    let quiz_scores: BTreeMap<String, i32> = data
        .database
        .quiz_scores(user_id)
        .await?
        .into_iter()
        .collect();

    Ok(HttpResponse::Ok().json(ProgressResponse {
        completed_topics,
        quiz_scores,
    }))
}

pub async fn mark_completed(
    data: web::Data<AppState>,
    request: web::Json<MarkCompletedRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    data.database
        .mark_topic_completed(req.user_id, &req.topic_id)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Topic marked as completed".to_string(),
    }))
}

pub async fn save_quiz_score(
    data: web::Data<AppState>,
    request: web::Json<SaveQuizScoreRequest>,
) -> Result<HttpResponse, AppError> {
    let req = request.into_inner();

    data.database
        .upsert_quiz_score(req.user_id, &req.topic_id, req.score)
        .await?;
    data.database
        .mark_topic_completed(req.user_id, &req.topic_id)
        .await?;

    let completed = data.database.count_completed_topics(req.user_id).await?;
    let progress = ((completed as f64 / TOTAL_TOPICS as f64) * 100.0).round() as i32;
    data.database.set_progress(req.user_id, progress).await?;

    // A failed award check must not fail the score submission itself.
    let award = match certificates::check_and_award(&data.database, req.user_id).await {
        Ok(award) => award,
        Err(e) => {
            tracing::error!("certificate award check failed: {}", e);
            AwardOutcome::not_awarded()
        }
    };

    Ok(HttpResponse::Ok().json(SaveQuizScoreResponse {
        message: "Quiz score saved".to_string(),
        certificate_awarded: award.awarded,
        certificate_code: award.certificate_code,
    }))
}

pub async fn list_certificates(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let certificates = data
        .database
        .certificates_for_user(path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(certificates))
}

pub async fn verify_certificate(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();

    let certificate = data
        .database
        .find_certificate_by_code(&code)
        .await?
        .ok_or_else(|| AppError::NotFound("Certificate".to_string()))?;

    Ok(HttpResponse::Ok().json(certificate))
}
