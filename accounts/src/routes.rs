//! Route configuration for the accounts API, shared by the server binary and
//! the test harness.

use crate::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .route("/register", web::post().to(handlers::register))
            .route("/login", web::post().to(handlers::login))
            .route(
                "/progress/mark-completed",
                web::post().to(handlers::mark_completed),
            )
            .route("/progress/{user_id}", web::get().to(handlers::get_progress))
            .route("/quiz/save-score", web::post().to(handlers::save_quiz_score))
            .route(
                "/certificates/{user_id}",
                web::get().to(handlers::list_certificates),
            )
            .route(
                "/certificate/verify/{code}",
                web::get().to(handlers::verify_certificate),
            ),
    );
}
