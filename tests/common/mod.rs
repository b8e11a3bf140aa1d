// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

#![allow(dead_code)]

use async_trait::async_trait;
use careportal::config::Config;
use careportal::error::{PortalError, Result};
use careportal::models::{
    AuthData, PasswordCredentials, ProviderUser, Session, SignUpRequest, UserAttributes,
};
use careportal::navigation::Navigator;
use careportal::services::IdentityProvider;
use careportal::storage::MemoryStore;
use careportal::Portal;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Navigator that remembers every forced navigation.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

/// In-memory identity provider with switchable failures.
#[derive(Default)]
pub struct FakeProvider {
    /// Live session user
    pub user: Mutex<Option<ProviderUser>>,
    /// Access token handed out by sign-in/sign-up
    pub issue_token: Mutex<Option<String>>,
    pub fail_sign_up: Mutex<bool>,
    pub fail_sign_in: Mutex<bool>,
    pub fail_sign_out: Mutex<bool>,
    pub fail_get_user: Mutex<bool>,
    pub fail_update: Mutex<bool>,
    pub fail_reset: Mutex<bool>,
    pub last_sign_up: Mutex<Option<(String, String)>>,
    pub last_update: Mutex<Option<UserAttributes>>,
    pub last_reset: Mutex<Option<String>>,
    pub sign_out_calls: Mutex<usize>,
}

impl FakeProvider {
    pub fn signed_in_as(user: ProviderUser) -> Self {
        let provider = Self::default();
        *provider.user.lock().unwrap() = Some(user);
        provider
    }

    pub fn issuing(token: &str) -> Self {
        let provider = Self::default();
        *provider.issue_token.lock().unwrap() = Some(token.to_string());
        provider
    }

    fn rejection() -> PortalError {
        PortalError::Provider {
            status: 400,
            message: "Invalid login credentials".to_string(),
        }
    }

    fn issue(&self, user: ProviderUser) -> AuthData {
        *self.user.lock().unwrap() = Some(user.clone());
        let session = self
            .issue_token
            .lock()
            .unwrap()
            .clone()
            .map(|token| session(&token, user.clone()));
        AuthData {
            user: Some(user),
            session,
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthData> {
        *self.last_sign_up.lock().unwrap() = Some((request.email.clone(), request.role.clone()));
        if *self.fail_sign_up.lock().unwrap() {
            return Err(PortalError::Provider {
                status: 422,
                message: "User already registered".to_string(),
            });
        }
        Ok(self.issue(provider_user("new-user", &request.email, Some(&request.role))))
    }

    async fn sign_in_with_password(&self, credentials: &PasswordCredentials) -> Result<AuthData> {
        if *self.fail_sign_in.lock().unwrap() {
            return Err(Self::rejection());
        }
        Ok(self.issue(provider_user("user-1", &credentials.email, None)))
    }

    async fn sign_out(&self) -> Result<()> {
        *self.sign_out_calls.lock().unwrap() += 1;
        if *self.fail_sign_out.lock().unwrap() {
            return Err(PortalError::Provider {
                status: 500,
                message: "logout failed".to_string(),
            });
        }
        *self.user.lock().unwrap() = None;
        Ok(())
    }

    async fn get_user(&self) -> Result<Option<ProviderUser>> {
        if *self.fail_get_user.lock().unwrap() {
            return Err(PortalError::Provider {
                status: 503,
                message: "provider unavailable".to_string(),
            });
        }
        Ok(self.user.lock().unwrap().clone())
    }

    async fn update_user(&self, attributes: &UserAttributes) -> Result<ProviderUser> {
        let user = self
            .user
            .lock()
            .unwrap()
            .clone()
            .ok_or(PortalError::SessionMissing)?;
        if *self.fail_update.lock().unwrap() {
            return Err(PortalError::Provider {
                status: 422,
                message: "Unable to update user".to_string(),
            });
        }
        *self.last_update.lock().unwrap() = Some(attributes.clone());
        Ok(user)
    }

    async fn reset_password_for_email(&self, email: &str) -> Result<()> {
        if *self.fail_reset.lock().unwrap() {
            return Err(PortalError::Provider {
                status: 429,
                message: "For security purposes, you can only request this once every 60 seconds"
                    .to_string(),
            });
        }
        *self.last_reset.lock().unwrap() = Some(email.to_string());
        Ok(())
    }
}

/// Provider user record with optional role metadata.
pub fn provider_user(id: &str, email: &str, role: Option<&str>) -> ProviderUser {
    let metadata = match role {
        Some(role) => serde_json::json!({ "role": role }),
        None => serde_json::json!({}),
    };
    serde_json::from_value(serde_json::json!({
        "id": id,
        "email": email,
        "user_metadata": metadata,
    }))
    .unwrap()
}

pub fn session(token: &str, user: ProviderUser) -> Session {
    Session {
        access_token: token.to_string(),
        token_type: "bearer".to_string(),
        expires_in: Some(3600),
        expires_at: None,
        refresh_token: Some("refresh".to_string()),
        user,
    }
}

/// Portal wired to a fake provider, in-memory storage, and a recording navigator.
pub fn test_portal(
    backend_url: &str,
    provider: FakeProvider,
) -> (Portal, Arc<FakeProvider>, Arc<RecordingNavigator>) {
    let config = Config {
        backend_url: backend_url.to_string(),
        ..Config::default()
    };
    let provider = Arc::new(provider);
    let navigator = Arc::new(RecordingNavigator::default());

    let portal = Portal::new(
        config,
        provider.clone(),
        Arc::new(MemoryStore::new()),
        navigator.clone(),
    )
    .expect("portal should build");

    (portal, provider, navigator)
}

/// Create a test JWT token for `sub`.
pub fn create_test_jwt(sub: &str) -> String {
    #[derive(Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        aud: &'a str,
        exp: usize,
    }

    encode(
        &Header::new(Algorithm::HS256),
        &Claims {
            sub,
            aud: "authenticated",
            exp: 4_102_444_800,
        },
        &EncodingKey::from_secret(b"test_signing_key"),
    )
    .unwrap()
}
