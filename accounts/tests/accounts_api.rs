//! Live accounts-service integration tests. They run only when
//! SQLCAMP_TEST_ACCOUNTS_DATABASE_URL points at a MySQL database the tests
//! may create tables in; without it every test skips and passes.

use actix_web::{test, web, App};
use serde_json::{json, Value};
use sqlcamp_accounts::config::DatabaseConfig;
use sqlcamp_accounts::database::Database;
use sqlcamp_accounts::handlers::AppState;
use sqlcamp_accounts::routes;
use std::sync::Arc;
use std::time::SystemTime;

async fn test_state() -> Option<web::Data<AppState>> {
    let url = std::env::var("SQLCAMP_TEST_ACCOUNTS_DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        url,
        max_connections: 5,
        acquire_timeout_secs: 5,
    };

    let database = Database::connect(&config)
        .await
        .expect("connect accounts store");
    database.init().await.expect("init accounts schema");

    Some(web::Data::new(AppState {
        database: Arc::new(database),
        start_time: SystemTime::now(),
    }))
}

fn unique_email(tag: &str) -> String {
    format!("{}+{}@example.com", tag, chrono::Utc::now().timestamp_micros())
}

#[actix_rt::test]
async fn test_registration_and_login_flow() {
    let Some(state) = test_state().await else {
        eprintln!("SQLCAMP_TEST_ACCOUNTS_DATABASE_URL not set, skipping");
        return;
    };
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(routes::configure_routes),
    )
    .await;

    let email = unique_email("flow");

    // Register a fresh user
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "name": "Test Learner", "email": email.as_str(), "password": "sekrit123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["email"], email.as_str());
    assert_eq!(user["progress"], 0);
    assert!(user.get("password").is_none());

    // Duplicate email is refused
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "name": "Other", "email": email.as_str(), "password": "different" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Email already registered");

    // Correct credentials log in
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": email.as_str(), "password": "sekrit123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let logged_in: Value = test::read_body_json(resp).await;
    assert_eq!(logged_in["id"], user["id"]);

    // Wrong password is rejected without detail
    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": email.as_str(), "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_rt::test]
async fn test_progress_and_certificate_flow() {
    let Some(state) = test_state().await else {
        eprintln!("SQLCAMP_TEST_ACCOUNTS_DATABASE_URL not set, skipping");
        return;
    };
    let app = test::init_service(
        App::new()
            .app_data(state)
            .configure(routes::configure_routes),
    )
    .await;

    let email = unique_email("progress");
    let req = test::TestRequest::post()
        .uri("/api/register")
        .set_json(json!({ "name": "Progress Learner", "email": email.as_str(), "password": "sekrit123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let user: Value = test::read_body_json(resp).await;
    let user_id = user["id"].as_i64().unwrap();

    // Finish all five topics; the last submission awards the certificate.
    let topics = ["basics", "filtering", "sorting", "aggregation", "joins"];
    let mut certificate_code = None;
    for (idx, topic) in topics.iter().enumerate() {
        let req = test::TestRequest::post()
            .uri("/api/quiz/save-score")
            .set_json(json!({ "userId": user_id, "topicId": topic, "score": 80 + idx as i64 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Quiz score saved");
        if idx + 1 < topics.len() {
            assert_eq!(body["certificateAwarded"], false);
        } else {
            assert_eq!(body["certificateAwarded"], true);
            certificate_code = body["certificateCode"].as_str().map(str::to_string);
        }
    }
    let certificate_code = certificate_code.expect("certificate code issued");

    // Progress reflects all completed topics and scores
    let req = test::TestRequest::get()
        .uri(&format!("/api/progress/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let progress: Value = test::read_body_json(resp).await;
    assert_eq!(progress["completedTopics"].as_array().unwrap().len(), 5);
    assert_eq!(progress["quizScores"]["joins"], 84);

    // Resubmitting a topic updates the score and never double-awards
    let req = test::TestRequest::post()
        .uri("/api/quiz/save-score")
        .set_json(json!({ "userId": user_id, "topicId": "joins", "score": 100 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["certificateAwarded"], false);

    // The certificate is listed and publicly verifiable
    let req = test::TestRequest::get()
        .uri(&format!("/api/certificates/{user_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let certificates: Value = test::read_body_json(resp).await;
    assert_eq!(certificates.as_array().unwrap().len(), 1);
    assert_eq!(certificates[0]["certificate_code"], certificate_code.as_str());

    let req = test::TestRequest::get()
        .uri(&format!("/api/certificate/verify/{certificate_code}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let verification: Value = test::read_body_json(resp).await;
    assert_eq!(verification["user_name"], "Progress Learner");

    // Unknown codes are a 404, not an error
    let req = test::TestRequest::get()
        .uri("/api/certificate/verify/CERT-DOES-NOT-EXIST")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Certificate not found");
}
