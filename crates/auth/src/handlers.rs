//! Axum REST handlers for the auth endpoints.

use adboard_core::{ApiError, MessageResponse};
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::models::{
    ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, LoginResponse,
    ResetPasswordRequest,
};
use crate::service::AuthService;

/// Shared auth state.
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
}

pub async fn login(
    State(state): State<AuthState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = state.service.login(&req)?;
    metrics::counter!("auth.logins").increment(1);
    Ok(Json(response))
}

pub async fn forgot_password(
    State(state): State<AuthState>,
    Json(req): Json<ForgotPasswordRequest>,
) -> Result<Json<ForgotPasswordResponse>, ApiError> {
    let reset_token = state.service.forgot_password(&req.email)?;
    Ok(Json(ForgotPasswordResponse {
        message: "Recovery link sent to the registered email".to_string(),
        reset_token,
    }))
}

pub async fn reset_password(
    State(state): State<AuthState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.service.reset_password(&req)?;
    Ok(Json(MessageResponse::new("Password updated successfully")))
}
