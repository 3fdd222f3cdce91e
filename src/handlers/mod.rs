//! HTTP request handlers
//!
//! This module contains all the request handlers for the API endpoints.

pub mod account;
pub mod course;
pub mod health;
pub mod protected;

pub use crate::state::AppState;
pub use account::{login_handler, register_handler, LoginRequest, LoginResponse, RegisterRequest};
pub use course::{
    create_course_handler, delete_course_handler, get_course_handler, list_courses_handler,
    replace_course_handler, set_instructor_handler, CourseListResponse, CreateCourseRequest,
    InsertOutcome, ReplaceCourseRequest, SetInstructorRequest, UpdateOutcome,
};
pub use health::{health, HealthResponse};
pub use protected::{payment_handler, profile_handler, ProfileResponse};
