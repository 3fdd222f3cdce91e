//! Course entity and repository

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Row};
use uuid::Uuid;

/// Instructor record attached to a course. Free-form, not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub name: String,
    pub department: String,
    pub office: String,
}

impl Instructor {
    /// The fixed record written by the instructor-assignment endpoint.
    ///
    /// The endpoint requires an instructor in the request body but always
    /// stores this literal, regardless of the submitted value. That is the
    /// documented external contract of the endpoint.
    pub fn placeholder() -> Self {
        Self {
            name: "John Smith".to_string(),
            department: "Computer Science".to_string(),
            office: "Room 123".to_string(),
        }
    }
}

/// Course entity from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub coursename: String,
    pub subjects: Vec<String>,
    pub datetime: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Json<Instructor>>,
}

/// Repository for course database operations
#[derive(Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    /// SQL for the filtered listing. `coursename` is a case-insensitive
    /// substring match; `subject` is an exact array-membership match. A NULL
    /// bind disables the corresponding filter, so no filters returns all rows.
    const LIST_SQL: &'static str = r#"
        SELECT id, coursename, subjects, datetime, instructor
        FROM courses
        WHERE ($1::text IS NULL OR coursename ILIKE '%' || $1 || '%')
          AND ($2::text IS NULL OR $2 = ANY(subjects))
        ORDER BY datetime
    "#;

    /// Create a new course repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List courses matching the optional name and subject filters
    pub async fn list(
        &self,
        coursename: Option<&str>,
        subject: Option<&str>,
    ) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(Self::LIST_SQL)
            .bind(coursename)
            .bind(subject)
            .fetch_all(&self.pool)
            .await
    }

    /// Find a course by its identifier
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, coursename, subjects, datetime, instructor
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a new course, returning its server-generated identifier
    pub async fn insert(
        &self,
        coursename: &str,
        subjects: &[String],
        datetime: DateTime<Utc>,
    ) -> Result<Uuid, sqlx::Error> {
        let row = sqlx::query(
            r#"
            INSERT INTO courses (coursename, subjects, datetime)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(coursename)
        .bind(subjects)
        .bind(datetime)
        .fetch_one(&self.pool)
        .await?;

        row.try_get("id")
    }

    /// Replace the name, subjects and datetime of an existing course.
    /// The instructor field is untouched. Returns the number of matched rows.
    pub async fn replace(
        &self,
        id: Uuid,
        coursename: &str,
        subjects: &[String],
        datetime: DateTime<Utc>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET coursename = $2, subjects = $3, datetime = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(coursename)
        .bind(subjects)
        .bind(datetime)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Set the instructor record on a course. Returns the number of matched rows.
    pub async fn set_instructor(
        &self,
        id: Uuid,
        instructor: &Instructor,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE courses SET instructor = $2 WHERE id = $1")
            .bind(id)
            .bind(Json(instructor))
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a course. Deleting an absent id is not an error.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
