//! Account registration and login handlers

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::handlers::course::{InsertOutcome, ResultResponse};
use crate::handlers::AppState;

/// bcrypt work factor for stored password hashes. Fixed and deliberately
/// expensive; changing it only affects hashes created afterwards.
const BCRYPT_COST: u32 = 12;

/// Request for registering a student account
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// POST /student - register a new account
///
/// The password is hashed before it is stored; the plaintext never reaches
/// the database. Email format and uniqueness are not checked at this layer.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ResultResponse<InsertOutcome>>, ApiError> {
    let password = request.password;
    let password_hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            ApiError::internal("Password hashing failed")
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "bcrypt hashing failed");
            ApiError::internal("Password hashing failed")
        })?;

    let inserted_id = state.students.insert(&request.email, &password_hash).await?;

    tracing::info!(student_id = %inserted_id, "Student registered");

    Ok(Json(ResultResponse {
        result: InsertOutcome { inserted_id },
    }))
}

/// Request for logging in
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying a freshly issued session token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /login - verify credentials and issue a session token
///
/// Unknown email and wrong password take the same error path so the
/// response does not reveal whether an account exists.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let student = state
        .students
        .find_by_email(&request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let password = request.password;
    let stored_hash = student.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            ApiError::internal("Password verification failed")
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "bcrypt verification failed");
            ApiError::internal("Password verification failed")
        })?;

    if !matches {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.token_keys.issue(student.id, &student.email)?;

    tracing::info!(student_id = %student.id, "Student logged in");

    Ok(Json(LoginResponse { token }))
}
