//! Bearer-token middleware for the role endpoints.
//!
//! Development: accepts any token issued by the login endpoint (identified
//! by its prefix). Production: validate a JWT against the identity provider.

use adboard_core::{ApiError, DEV_TOKEN_PREFIX};
use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub async fn require_bearer(req: Request, next: Next) -> Response {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth_header {
        Some(value) if value.starts_with("Bearer ") => {
            let token = &value[7..];
            if token.starts_with(DEV_TOKEN_PREFIX) && token.len() > DEV_TOKEN_PREFIX.len() {
                next.run(req).await
            } else {
                ApiError::Unauthorized("invalid or expired bearer token".to_string())
                    .into_response()
            }
        }
        _ => ApiError::Unauthorized("Authorization header with Bearer token required".to_string())
            .into_response(),
    }
}
