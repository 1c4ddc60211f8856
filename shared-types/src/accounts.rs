use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

// ============ Accounts, Progress & Certificates ============

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User record as seen by the client; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub progress: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub completed_topics: Vec<String>,
    pub quiz_scores: BTreeMap<String, i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MarkCompletedRequest {
    pub user_id: i64,
    pub topic_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuizScoreRequest {
    pub user_id: i64,
    pub topic_id: String,
    pub score: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SaveQuizScoreResponse {
    pub message: String,
    pub certificate_awarded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_code: Option<String>,
}

/// Certificate row, keyed the way the store names its columns
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Certificate {
    pub id: i64,
    pub user_id: i64,
    pub certificate_type: String,
    pub certificate_code: String,
    pub issued_at: String,
}

/// Certificate joined with its holder, for public verification
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CertificateVerification {
    pub id: i64,
    pub user_id: i64,
    pub certificate_type: String,
    pub certificate_code: String,
    pub issued_at: String,
    pub user_name: String,
    pub user_email: String,
}

/// Plain-message envelope used by the accounts wire for status and errors
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MessageResponse {
    pub message: String,
}
