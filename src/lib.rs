//! Campus Server Library - REST API components for the course catalog
//!
//! This library exposes the server components for use in integration tests.
//! The main binary uses these same components.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use auth::{AuthClaims, Claims, TokenKeys, TOKEN_TTL_SECS};
pub use config::{Config, ConfigError};
pub use db::{Course, CourseRepository, Instructor, Student, StudentRepository};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
