use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlcamp_types::{Certificate, CertificateVerification, UserRecord};
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

/// Internal user row; carries the password hash and never crosses the wire.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserAuthRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub progress: i32,
}

#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        Ok(Database { pool })
    }

    /// Creates the account tables. Idempotent; safe to run at every startup.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL UNIQUE,
                password VARCHAR(255) NOT NULL,
                progress INT DEFAULT 0,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS completed_topics (
                id INT AUTO_INCREMENT PRIMARY KEY,
                user_id INT NOT NULL,
                topic_id VARCHAR(50) NOT NULL,
                completed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                UNIQUE KEY user_topic (user_id, topic_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS quiz_scores (
                id INT AUTO_INCREMENT PRIMARY KEY,
                user_id INT NOT NULL,
                topic_id VARCHAR(50) NOT NULL,
                score INT NOT NULL,
                completed_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                UNIQUE KEY user_topic (user_id, topic_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS certificates (
                id INT AUTO_INCREMENT PRIMARY KEY,
                user_id INT NOT NULL,
                certificate_type VARCHAR(100) DEFAULT 'SQL Completion Certificate',
                certificate_code VARCHAR(50) UNIQUE NOT NULL,
                issued_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
                UNIQUE KEY user_certificate (user_id, certificate_type)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_id() as i64),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::DuplicateEmail)
            }
            Err(other) => Err(other.into()),
        }
    }

    pub async fn get_user_auth_by_email(&self, email: &str) -> AppResult<Option<UserAuthRow>> {
        let row = sqlx::query_as::<_, UserAuthRow>(
            "SELECT id, name, email, password, progress FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_user_record(&self, user_id: i64) -> AppResult<Option<UserRecord>> {
        let row = sqlx::query_as::<_, (i64, String, String, i32)>(
            "SELECT id, name, email, progress FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, name, email, progress)| UserRecord {
            id,
            name,
            email,
            progress,
        }))
    }

    pub async fn completed_topics(&self, user_id: i64) -> AppResult<Vec<String>> {
        let topics =
            sqlx::query_scalar::<_, String>("SELECT topic_id FROM completed_topics WHERE user_id = ?")
                .bind(user_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(topics)
    }

    pub async fn quiz_scores(&self, user_id: i64) -> AppResult<Vec<(String, i32)>> {
        let scores = sqlx::query_as::<_, (String, i32)>(
            "SELECT topic_id, score FROM quiz_scores WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(scores)
    }

    pub async fn mark_topic_completed(&self, user_id: i64, topic_id: &str) -> AppResult<()> {
        sqlx::query("INSERT IGNORE INTO completed_topics (user_id, topic_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(topic_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn upsert_quiz_score(
        &self,
        user_id: i64,
        topic_id: &str,
        score: i32,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO quiz_scores (user_id, topic_id, score) VALUES (?, ?, ?) \
             ON DUPLICATE KEY UPDATE score = ?, completed_at = CURRENT_TIMESTAMP",
        )
        .bind(user_id)
        .bind(topic_id)
        .bind(score)
        .bind(score)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count_completed_topics(&self, user_id: i64) -> AppResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM completed_topics WHERE user_id = ?")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn set_progress(&self, user_id: i64, progress: i32) -> AppResult<()> {
        sqlx::query("UPDATE users SET progress = ? WHERE id = ?")
            .bind(progress)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn has_certificate(&self, user_id: i64, certificate_type: &str) -> AppResult<bool> {
        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM certificates WHERE user_id = ? AND certificate_type = ?",
        )
        .bind(user_id)
        .bind(certificate_type)
        .fetch_optional(&self.pool)
        .await?;

        Ok(existing.is_some())
    }

    pub async fn insert_certificate(
        &self,
        user_id: i64,
        certificate_type: &str,
        certificate_code: &str,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO certificates (user_id, certificate_type, certificate_code) VALUES (?, ?, ?)",
        )
        .bind(user_id)
        .bind(certificate_type)
        .bind(certificate_code)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn certificates_for_user(&self, user_id: i64) -> AppResult<Vec<Certificate>> {
        let rows = sqlx::query_as::<_, (i64, i64, String, String, DateTime<Utc>)>(
            "SELECT id, user_id, certificate_type, certificate_code, issued_at \
             FROM certificates WHERE user_id = ? ORDER BY issued_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(
                |(id, user_id, certificate_type, certificate_code, issued_at)| Certificate {
                    id,
                    user_id,
                    certificate_type,
                    certificate_code,
                    issued_at: issued_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                },
            )
            .collect())
    }

    pub async fn find_certificate_by_code(
        &self,
        certificate_code: &str,
    ) -> AppResult<Option<CertificateVerification>> {
        let row = sqlx::query_as::<_, (i64, i64, String, String, DateTime<Utc>, String, String)>(
            "SELECT c.id, c.user_id, c.certificate_type, c.certificate_code, c.issued_at, \
                    u.name AS user_name, u.email AS user_email \
             FROM certificates c \
             JOIN users u ON c.user_id = u.id \
             WHERE c.certificate_code = ?",
        )
        .bind(certificate_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(
            |(id, user_id, certificate_type, certificate_code, issued_at, user_name, user_email)| {
                CertificateVerification {
                    id,
                    user_id,
                    certificate_type,
                    certificate_code,
                    issued_at: issued_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                    user_name,
                    user_email,
                }
            },
        ))
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
