//! Token-gated handlers
//!
//! Reachable only through the `AuthClaims` extractor; a request without a
//! valid bearer token is rejected before these run.

use axum::Json;
use serde::Serialize;

use crate::auth::{AuthClaims, Claims};

/// Response for the profile route, echoing the decoded token payload
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub message: &'static str,
    pub payload: Claims,
}

/// GET /profile - protected route returning the session payload
pub async fn profile_handler(AuthClaims(claims): AuthClaims) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: "success in accessing protected route",
        payload: claims,
    })
}

/// Response for the payment route
#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub message: &'static str,
}

/// GET /payment - protected route with no payload
pub async fn payment_handler(_claims: AuthClaims) -> Json<PaymentResponse> {
    Json(PaymentResponse {
        message: "accessing protected payment route",
    })
}
