// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User, session, and identity payload models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use validator::Validate;

/// Role assumed when the provider's user metadata carries none.
pub const DEFAULT_ROLE: &str = "patient";

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// The signed-in principal as the application sees it.
///
/// Rebuilt from the identity provider on every lookup; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

impl User {
    /// Project a provider user record onto the application user.
    pub fn from_provider(user: &ProviderUser) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone().unwrap_or_default(),
            role: user.role().unwrap_or(DEFAULT_ROLE).to_string(),
        }
    }
}

/// User record as returned by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: HashMap<String, Value>,
    #[serde(default)]
    pub app_metadata: HashMap<String, Value>,
    pub email_confirmed_at: Option<DateTime<Utc>>,
    pub last_sign_in_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ProviderUser {
    /// Role from user metadata; empty or non-string values count as absent.
    pub fn role(&self) -> Option<&str> {
        self.user_metadata
            .get("role")
            .and_then(Value::as_str)
            .filter(|r| !r.is_empty())
    }
}

/// Active provider session, produced only by sign-in and sign-up.
#[derive(Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: Option<i64>,
    /// Unix timestamp
    pub expires_at: Option<i64>,
    pub refresh_token: Option<String>,
    pub user: ProviderUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Expiry reported by the provider, if any.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("user", &self.user.id)
            .finish()
    }
}

/// Result of a sign-in or sign-up.
///
/// `session` is absent when the provider requires email confirmation
/// before issuing one.
#[derive(Debug, Clone)]
pub struct AuthData {
    pub user: Option<ProviderUser>,
    pub session: Option<Session>,
}

/// Email/password sign-in credentials.
#[derive(Clone, Serialize, Validate)]
pub struct PasswordCredentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl PasswordCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration request. `role` is stored as provider user metadata.
#[derive(Clone, Validate)]
pub struct SignUpRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1, max = 64))]
    pub role: String,
}

/// Attribute changes for the current provider user.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UserAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub password: Option<String>,
    /// Merged into the user's metadata by the provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

impl UserAttributes {
    /// Attribute change that only sets a new password.
    pub fn password(new_password: impl Into<String>) -> Self {
        Self {
            password: Some(new_password.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn provider_user(metadata: Value) -> ProviderUser {
        serde_json::from_value(json!({
            "id": "user-1",
            "email": "ada@example.com",
            "user_metadata": metadata,
        }))
        .unwrap()
    }

    #[test]
    fn test_role_defaults_to_patient() {
        let user = User::from_provider(&provider_user(json!({})));
        assert_eq!(user.role, "patient");

        let user = User::from_provider(&provider_user(json!({ "role": "" })));
        assert_eq!(user.role, "patient");

        let user = User::from_provider(&provider_user(json!({ "role": 7 })));
        assert_eq!(user.role, "patient");
    }

    #[test]
    fn test_role_from_metadata() {
        let user = User::from_provider(&provider_user(json!({ "role": "clinician" })));
        assert_eq!(
            user,
            User {
                id: "user-1".to_string(),
                email: "ada@example.com".to_string(),
                role: "clinician".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_email_becomes_empty() {
        let raw: ProviderUser = serde_json::from_value(json!({ "id": "user-2" })).unwrap();
        assert_eq!(User::from_provider(&raw).email, "");
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session: Session = serde_json::from_value(json!({
            "access_token": "secret-token",
            "expires_at": 1_700_000_000,
            "user": { "id": "user-1" },
        }))
        .unwrap();

        let debug = format!("{session:?}");
        assert!(!debug.contains("secret-token"));
        assert_eq!(session.token_type, "bearer");
        assert!(session.expires_at().is_some());
    }
}
