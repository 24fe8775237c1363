//! Auth router — login, forgot-password and reset-password.

use adboard_core::config::AuthConfig;
use axum::routing::post;
use axum::Router;
use std::sync::Arc;

use crate::handlers::{self, AuthState};
use crate::service::AuthService;

pub fn auth_router(config: AuthConfig) -> Router {
    let state = AuthState {
        service: Arc::new(AuthService::dev(config)),
    };

    Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/forgot", post(handlers::forgot_password))
        .route("/auth/reset", post(handlers::reset_password))
        .with_state(state)
}
