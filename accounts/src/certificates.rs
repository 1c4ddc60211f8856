use crate::database::Database;
use crate::error::AppResult;
use rand::distr::Alphanumeric;
use rand::Rng;

pub const COMPLETION_CERTIFICATE: &str = "SQL Completion Certificate";

/// Number of lesson topics in the course; progress percentages and
/// certificate award are both computed against this total.
pub const TOTAL_TOPICS: i64 = 5;

pub struct AwardOutcome {
    pub awarded: bool,
    pub certificate_code: Option<String>,
}

impl AwardOutcome {
    pub fn not_awarded() -> Self {
        AwardOutcome {
            awarded: false,
            certificate_code: None,
        }
    }
}

/// Issues the completion certificate once a user has finished every topic.
/// Idempotent: a user holds at most one certificate of a given type, so
/// re-checking after further quiz submissions awards nothing new.
pub async fn check_and_award(database: &Database, user_id: i64) -> AppResult<AwardOutcome> {
    let completed = database.count_completed_topics(user_id).await?;
    if completed < TOTAL_TOPICS {
        return Ok(AwardOutcome::not_awarded());
    }

    if database
        .has_certificate(user_id, COMPLETION_CERTIFICATE)
        .await?
    {
        return Ok(AwardOutcome::not_awarded());
    }

    let code = generate_certificate_code();
    database
        .insert_certificate(user_id, COMPLETION_CERTIFICATE, &code)
        .await?;

    Ok(AwardOutcome {
        awarded: true,
        certificate_code: Some(code),
    })
}

/// Codes look like `CERT-<issue instant>-<5 random alphanumerics>`, uppercase.
/// The UNIQUE column on certificate_code backstops the unlikely collision.
pub fn generate_certificate_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(5)
        .map(char::from)
        .collect();

    format!(
        "CERT-{:X}-{}",
        chrono::Utc::now().timestamp_millis(),
        suffix
    )
    .to_uppercase()
}
