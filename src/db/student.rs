//! Student account entity and repository
//!
//! Accounts are created at registration and read back only during login;
//! there is no direct read, update or delete endpoint for them.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

/// Student account from database. Deliberately not `Serialize`: the stored
/// password hash must never leave the process in a response body.
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Repository for student account database operations
#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new student repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new account, returning its server-generated identifier.
    /// Email uniqueness is not enforced at this layer.
    pub async fn insert(&self, email: &str, password_hash: &str) -> Result<Uuid, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO students (email, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        row.try_get("id")
    }

    /// Find an account by exact email match
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM students
            WHERE email = $1
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }
}
