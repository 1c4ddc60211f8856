//! Route configuration for the practice sandbox API, shared by the server
//! binary and the test harness.

use crate::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::scope("/practice")
                    .route("/execute", web::post().to(handlers::execute_query))
                    .route("/schema", web::get().to(handlers::get_schema))
                    .route(
                        "/sample-queries",
                        web::get().to(handlers::get_sample_queries),
                    ),
            ),
    );
}
