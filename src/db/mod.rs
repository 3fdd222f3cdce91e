//! Database module
//!
//! Contains entities and repositories for the course catalog and student
//! accounts. Each repository owns a handle to the shared connection pool.

pub mod course;
pub mod student;

pub use course::{Course, CourseRepository, Instructor};
pub use student::{Student, StudentRepository};
