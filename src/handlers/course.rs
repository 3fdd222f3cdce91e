//! Course CRUD handlers
//!
//! Each handler maps one request to one-to-few repository calls. Request and
//! response bodies are typed structs, so missing or wrongly-typed fields are
//! rejected at deserialization before any handler code runs.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{Course, Instructor};
use crate::error::ApiError;
use crate::handlers::AppState;

/// Query filters for the course listing
#[derive(Debug, Deserialize)]
pub struct CourseListQuery {
    /// Case-insensitive substring match on the course name
    pub coursename: Option<String>,
    /// Exact membership match against the subjects of each course
    pub subjects: Option<String>,
}

/// Response for the course listing
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub course: Vec<Course>,
}

/// GET /course - list courses, optionally filtered by name and subject
pub async fn list_courses_handler(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let course = state
        .courses
        .list(query.coursename.as_deref(), query.subjects.as_deref())
        .await?;

    Ok(Json(CourseListResponse { course }))
}

/// Request for creating a course
#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: String,
    pub subjects: Vec<String>,
    /// Defaults to the creation time when omitted
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
}

/// Outcome of an insertion, carrying the server-generated identifier
#[derive(Debug, Serialize)]
pub struct InsertOutcome {
    pub inserted_id: Uuid,
}

/// Response wrapper for write operations
#[derive(Debug, Serialize)]
pub struct ResultResponse<T> {
    pub result: T,
}

/// POST /course - create a course
pub async fn create_course_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<Json<ResultResponse<InsertOutcome>>, ApiError> {
    if request.course_name.trim().is_empty() {
        return Err(ApiError::bad_request("A coursename must be provided"));
    }

    let datetime = request.datetime.unwrap_or_else(Utc::now);
    let inserted_id = state
        .courses
        .insert(&request.course_name, &request.subjects, datetime)
        .await?;

    tracing::info!(course_id = %inserted_id, "Course created");

    Ok(Json(ResultResponse {
        result: InsertOutcome { inserted_id },
    }))
}

/// GET /course/{id} - fetch a single course
pub async fn get_course_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Course>, ApiError> {
    state
        .courses
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("course not found"))
}

/// Request for assigning an instructor to a course
#[derive(Debug, Deserialize)]
pub struct SetInstructorRequest {
    pub instructor: Instructor,
}

/// Response for the instructor assignment
#[derive(Debug, Serialize)]
pub struct AcceptedResponse {
    pub result: &'static str,
}

/// PATCH /course/{id} - attach an instructor record to a course
///
/// The submitted instructor is required in the body but only checked for
/// presence: the stored record is always [`Instructor::placeholder`].
/// Responds 202 whether or not a matching course existed.
pub async fn set_instructor_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SetInstructorRequest>,
) -> Result<(StatusCode, Json<AcceptedResponse>), ApiError> {
    let _submitted = request.instructor;

    let rows_affected = state
        .courses
        .set_instructor(id, &Instructor::placeholder())
        .await?;

    tracing::debug!(course_id = %id, rows_affected, "Instructor assigned");

    Ok((StatusCode::ACCEPTED, Json(AcceptedResponse { result: "accepted" })))
}

/// Request for replacing a course's name, subjects and datetime
#[derive(Debug, Deserialize)]
pub struct ReplaceCourseRequest {
    pub coursename: String,
    pub subjects: Vec<String>,
    #[serde(default)]
    pub datetime: Option<DateTime<Utc>>,
}

/// Outcome of an update
#[derive(Debug, Serialize)]
pub struct UpdateOutcome {
    pub rows_affected: u64,
}

/// PUT /course/{id} - replace name, subjects and datetime of a course
pub async fn replace_course_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReplaceCourseRequest>,
) -> Result<Json<ResultResponse<UpdateOutcome>>, ApiError> {
    if request.coursename.trim().is_empty() {
        return Err(ApiError::bad_request("Invalid data provided"));
    }

    let datetime = request.datetime.unwrap_or_else(Utc::now);
    let rows_affected = state
        .courses
        .replace(id, &request.coursename, &request.subjects, datetime)
        .await?;

    Ok(Json(ResultResponse {
        result: UpdateOutcome { rows_affected },
    }))
}

/// Response for a deletion
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// DELETE /course/{id} - remove a course
///
/// Idempotent: deleting an id with no matching course still succeeds.
pub async fn delete_course_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let rows_affected = state.courses.delete(id).await?;

    tracing::debug!(course_id = %id, rows_affected, "Course deleted");

    Ok(Json(DeleteResponse { message: "Deleted" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_non_array_subjects() {
        let body = serde_json::json!({
            "course_name": "Biology 101",
            "subjects": "Biology"
        });
        assert!(serde_json::from_value::<CreateCourseRequest>(body).is_err());
    }

    #[test]
    fn test_create_request_datetime_defaults_to_none() {
        let body = serde_json::json!({
            "course_name": "Biology 101",
            "subjects": ["Biology", "Lab Work"]
        });
        let request: CreateCourseRequest = serde_json::from_value(body).unwrap();
        assert!(request.datetime.is_none());
        assert_eq!(request.subjects.len(), 2);
    }

    #[test]
    fn test_set_instructor_request_requires_instructor() {
        let body = serde_json::json!({});
        assert!(serde_json::from_value::<SetInstructorRequest>(body).is_err());

        let body = serde_json::json!({
            "instructor": {
                "name": "Ada Lovelace",
                "department": "Mathematics",
                "office": "Room 1"
            }
        });
        let request: SetInstructorRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.instructor.name, "Ada Lovelace");
    }

    #[test]
    fn test_replace_request_field_names() {
        // The replace body uses `coursename`, not `course_name`
        let body = serde_json::json!({
            "coursename": "Biology 102",
            "subjects": ["Biology"]
        });
        assert!(serde_json::from_value::<ReplaceCourseRequest>(body).is_ok());

        let body = serde_json::json!({
            "course_name": "Biology 102",
            "subjects": ["Biology"]
        });
        assert!(serde_json::from_value::<ReplaceCourseRequest>(body).is_err());
    }
}
