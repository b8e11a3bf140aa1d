// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer credential ownership.
//!
//! `CredentialStore` is the only code that touches the credential storage
//! key. Sign-in/sign-up write it, sign-out and the API client's 401 handler
//! clear it, and the request interceptor reads it.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Session;
use crate::storage::KeyValueStore;

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "jwt_token";

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Read the token's claims without verifying its signature or expiry.
    ///
    /// Returns `None` for tokens that are not JWTs. Only used to compare
    /// principals; never to make an authorization decision.
    pub fn unverified_claims(&self) -> Option<CredentialClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<CredentialClaims>(&self.0, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .ok()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Claims of interest in a provider-issued access token.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialClaims {
    /// Subject (provider user ID)
    pub sub: String,
    pub email: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: Option<i64>,
}

/// Owner of the persisted bearer credential.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Current credential. Storage read failures count as "no credential".
    pub fn token(&self) -> Option<Credential> {
        match self.storage.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()).map(Credential),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored credential, sending unauthenticated");
                None
            }
        }
    }

    /// Persist the access token of a freshly issued session.
    pub fn store(&self, session: &Session) -> Result<()> {
        self.set_token(&session.access_token)
    }

    /// Replace the stored token.
    pub fn set_token(&self, token: &str) -> Result<()> {
        self.storage.set(TOKEN_KEY, token)?;
        tracing::debug!("Bearer credential stored");
        Ok(())
    }

    /// Remove the stored token.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove(TOKEN_KEY)?;
        tracing::debug!("Bearer credential cleared");
        Ok(())
    }
}
