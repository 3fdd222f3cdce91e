//! Router configuration module
//!
//! Configures all routes, middleware layers, and creates the application router.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_course_handler, delete_course_handler, get_course_handler, health,
    list_courses_handler, login_handler, payment_handler, profile_handler, register_handler,
    replace_course_handler, set_instructor_handler, AppState,
};

/// Create the application router over the given state.
///
/// Cross-origin requests are allowed from any origin. Requests are traced;
/// there is no rate limiting, request timeout or admission control.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/course",
            get(list_courses_handler).post(create_course_handler),
        )
        .route(
            "/course/{id}",
            get(get_course_handler)
                .patch(set_instructor_handler)
                .put(replace_course_handler)
                .delete(delete_course_handler),
        )
        .route("/student", post(register_handler))
        .route("/login", post(login_handler))
        .route("/profile", get(profile_handler))
        .route("/payment", get(payment_handler))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
