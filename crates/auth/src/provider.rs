//! External-collaborator seams and their in-memory development stand-ins.
//!
//! Production wires a real OpenID Connect client, the document-store user
//! directory, and the relational credential table behind these traits.

use adboard_core::config::AuthConfig;
use adboard_core::{ApiError, ApiResult, DEV_TOKEN_PREFIX};
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::models::{IssuedToken, UserRecord};

/// Token issuance against the identity provider.
pub trait IdentityProvider: Send + Sync {
    fn issue_token(&self, email: &str, password: &str) -> ApiResult<IssuedToken>;
}

/// User lookup against the document store.
pub trait UserDirectory: Send + Sync {
    fn find_by_email(&self, email: &str) -> Option<UserRecord>;
}

/// Password updates against the relational store.
pub trait CredentialStore: Send + Sync {
    fn update_password(&self, email: &str, new_password: &str) -> ApiResult<()>;
}

/// Generate a random development bearer token.
pub fn generate_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    format!(
        "{}{}",
        DEV_TOKEN_PREFIX,
        bytes.iter().map(|b| format!("{:02x}", b)).collect::<String>()
    )
}

// ─── Development implementations ───────────────────────────────────────────

/// Single source for the development accounts so the credential table and
/// the user directory can never drift apart: (user_id, email, role, password).
const DEV_ACCOUNTS: &[(&str, &str, &str, &str)] = &[
    ("u-1001", "admin@adboard.dev", "admin", "admin"),
    ("u-1002", "analyst@adboard.dev", "user", "campaign2024"),
];

/// Development identity provider: checks the password against the in-memory
/// credential table and mints a random token. Logs the endpoint the real
/// client would call.
pub struct DevIdentityProvider {
    config: AuthConfig,
    passwords: RwLock<HashMap<String, String>>,
}

impl DevIdentityProvider {
    pub fn new(config: AuthConfig) -> Self {
        let passwords = DEV_ACCOUNTS
            .iter()
            .map(|(_, email, _, password)| (email.to_string(), password.to_string()))
            .collect();
        Self {
            config,
            passwords: RwLock::new(passwords),
        }
    }
}

impl IdentityProvider for DevIdentityProvider {
    fn issue_token(&self, email: &str, password: &str) -> ApiResult<IssuedToken> {
        debug!(
            identity_url = %self.config.identity_url,
            client_id = %self.config.client_id,
            "development mode, skipping identity provider round-trip"
        );
        let passwords = self.passwords.read();
        match passwords.get(email) {
            Some(stored) if stored == password => Ok(IssuedToken {
                access_token: generate_token(),
                expires_at: Utc::now() + Duration::hours(self.config.token_ttl_hours),
            }),
            _ => Err(ApiError::Unauthorized("invalid credentials".to_string())),
        }
    }
}

impl CredentialStore for DevIdentityProvider {
    fn update_password(&self, email: &str, new_password: &str) -> ApiResult<()> {
        self.passwords
            .write()
            .insert(email.to_string(), new_password.to_string());
        info!(email = %email, "credentials updated");
        Ok(())
    }
}

/// Development user directory with a handful of seeded accounts.
pub struct DevUserDirectory {
    users: Vec<UserRecord>,
}

impl DevUserDirectory {
    pub fn new() -> Self {
        Self {
            users: DEV_ACCOUNTS
                .iter()
                .map(|(user_id, email, role, _)| UserRecord {
                    user_id: user_id.to_string(),
                    email: email.to_string(),
                    role: role.to_string(),
                })
                .collect(),
        }
    }
}

impl Default for DevUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for DevUserDirectory {
    fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.iter().find(|u| u.email == email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_directory_account_has_working_credentials() {
        let identity = DevIdentityProvider::new(AuthConfig::default());
        let directory = DevUserDirectory::new();
        for (_, email, _, password) in DEV_ACCOUNTS {
            assert!(directory.find_by_email(email).is_some());
            identity.issue_token(email, password).unwrap();
        }
    }

    #[test]
    fn test_generated_tokens_are_prefixed_and_unique() {
        let a = generate_token();
        let b = generate_token();
        assert!(a.starts_with(DEV_TOKEN_PREFIX));
        assert_ne!(a, b);
    }
}
