//! Orchestration of the login, forgot-password and reset-password flows.

use adboard_core::config::AuthConfig;
use adboard_core::{ApiError, ApiResult};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use crate::models::{LoginRequest, LoginResponse, ResetPasswordRequest};
use crate::provider::{
    generate_token, CredentialStore, DevIdentityProvider, DevUserDirectory, IdentityProvider,
    UserDirectory,
};

/// Reset tokens are single-use and expire after an hour.
const RESET_TOKEN_TTL_MINUTES: i64 = 60;

struct ResetGrant {
    email: String,
    expires_at: DateTime<Utc>,
}

pub struct AuthService {
    identity: Arc<dyn IdentityProvider>,
    directory: Arc<dyn UserDirectory>,
    credentials: Arc<dyn CredentialStore>,
    reset_grants: RwLock<HashMap<String, ResetGrant>>,
}

impl AuthService {
    /// Development wiring: every collaborator is an in-memory stub.
    pub fn dev(config: AuthConfig) -> Self {
        let identity = Arc::new(DevIdentityProvider::new(config));
        Self::new(identity.clone(), Arc::new(DevUserDirectory::new()), identity)
    }

    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        directory: Arc<dyn UserDirectory>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        Self {
            identity,
            directory,
            credentials,
            reset_grants: RwLock::new(HashMap::new()),
        }
    }

    /// Directory lookup first (unknown users are a 404, matching the
    /// reference flow), then token issuance by the identity provider.
    pub fn login(&self, req: &LoginRequest) -> ApiResult<LoginResponse> {
        let user = self
            .directory
            .find_by_email(&req.email)
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        let token = self.identity.issue_token(&req.email, &req.password)?;
        info!(user_id = %user.user_id, "login succeeded");
        Ok(LoginResponse {
            token: token.access_token,
            user_id: user.user_id,
            role: user.role,
            expires_at: token.expires_at,
        })
    }

    /// Issues a single-use reset token for a known user.
    pub fn forgot_password(&self, email: &str) -> ApiResult<String> {
        let user = self
            .directory
            .find_by_email(email)
            .ok_or_else(|| ApiError::NotFound("user not found".to_string()))?;

        let token = generate_token();
        self.reset_grants.write().insert(
            token.clone(),
            ResetGrant {
                email: user.email,
                expires_at: Utc::now() + Duration::minutes(RESET_TOKEN_TTL_MINUTES),
            },
        );
        info!(user_id = %user.user_id, "reset token issued");
        Ok(token)
    }

    /// Consumes the reset token and writes the new password through the
    /// credential store. Invalid, expired or already-used tokens are a 403.
    pub fn reset_password(&self, req: &ResetPasswordRequest) -> ApiResult<()> {
        let grant = self
            .reset_grants
            .write()
            .remove(&req.reset_token)
            .ok_or_else(|| ApiError::Forbidden("invalid or expired reset token".to_string()))?;
        if grant.expires_at < Utc::now() {
            return Err(ApiError::Forbidden(
                "invalid or expired reset token".to_string(),
            ));
        }
        self.credentials.update_password(&grant.email, &req.new_password)
    }
}
