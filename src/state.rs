//! Application state module
//!
//! Defines shared state accessible across all request handlers. Everything a
//! handler depends on is passed in here at construction; there are no
//! module-level singletons.

use std::sync::Arc;

use crate::auth::TokenKeys;
use crate::db::{CourseRepository, StudentRepository};

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Course repository over the shared connection pool
    pub courses: CourseRepository,
    /// Student account repository over the shared connection pool
    pub students: StudentRepository,
    /// Signing and verification keys for session tokens
    pub token_keys: Arc<TokenKeys>,
}
