// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session gate: who, if anyone, is signed in.
//!
//! Sign-in and sign-up copy the new session's access token into the
//! credential store; sign-out clears it whether or not the provider call
//! succeeds.

use std::sync::Arc;
use validator::Validate;

use super::identity::IdentityProvider;
use crate::credentials::CredentialStore;
use crate::error::Result;
use crate::models::{
    AuthData, PasswordCredentials, ProviderUser, SignUpRequest, User, UserAttributes,
};

/// Relation between the stored bearer credential and the provider's live
/// session. Reported only; nothing is reconciled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialDrift {
    /// Both refer to the same principal.
    InSync,
    /// No credential stored.
    NoCredential,
    /// A credential is stored but the provider has no live session.
    ProviderSignedOut,
    /// The credential names a different principal than the live session.
    PrincipalMismatch {
        credential_subject: String,
        provider_subject: String,
    },
    /// The credential is not a readable JWT, so no comparison is possible.
    Opaque,
}

impl CredentialDrift {
    pub fn is_drifted(&self) -> bool {
        matches!(
            self,
            CredentialDrift::ProviderSignedOut | CredentialDrift::PrincipalMismatch { .. }
        )
    }
}

#[derive(Clone)]
pub struct SessionGate {
    provider: Arc<dyn IdentityProvider>,
    credentials: CredentialStore,
}

impl SessionGate {
    pub fn new(provider: Arc<dyn IdentityProvider>, credentials: CredentialStore) -> Self {
        Self {
            provider,
            credentials,
        }
    }

    /// Current user, or `None` when nobody is signed in.
    ///
    /// Hard provider failures are returned as errors; callers decide how to
    /// degrade.
    pub async fn get_current_user(&self) -> Result<Option<User>> {
        let user = self.provider.get_user().await?;
        Ok(user.as_ref().map(User::from_provider))
    }

    /// Register a new account with the given role.
    pub async fn sign_up(&self, email: &str, password: &str, role: &str) -> Result<AuthData> {
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };
        request.validate()?;

        let data = self.provider.sign_up(&request).await?;
        self.remember(&data)?;
        Ok(data)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthData> {
        let credentials = PasswordCredentials::new(email, password);
        credentials.validate()?;

        let data = self.provider.sign_in_with_password(&credentials).await?;
        self.remember(&data)?;
        Ok(data)
    }

    /// End the provider session and drop the stored credential.
    ///
    /// The credential is cleared even if the provider call fails; the
    /// provider error is still returned.
    pub async fn sign_out(&self) -> Result<()> {
        let provider_result = self.provider.sign_out().await;

        let cleared = self.credentials.clear();
        if let Err(e) = &cleared {
            tracing::error!(error = %e, "Failed to clear credential on sign-out");
        }

        match provider_result {
            Ok(()) => {
                tracing::info!("Signed out");
                cleared
            }
            Err(e) => {
                tracing::warn!(error = %e, "Provider sign-out failed, credential cleared anyway");
                Err(e)
            }
        }
    }

    pub async fn update_user_profile(&self, attributes: &UserAttributes) -> Result<ProviderUser> {
        attributes.validate()?;
        self.provider.update_user(attributes).await
    }

    pub async fn reset_password(&self, email: &str) -> Result<()> {
        self.provider.reset_password_for_email(email).await
    }

    pub async fn update_password(&self, new_password: &str) -> Result<()> {
        let attributes = UserAttributes::password(new_password);
        attributes.validate()?;
        self.provider.update_user(&attributes).await.map(|_| ())
    }

    /// Compare the stored credential's subject with the provider's live user.
    pub async fn credential_drift(&self) -> Result<CredentialDrift> {
        let Some(credential) = self.credentials.token() else {
            return Ok(CredentialDrift::NoCredential);
        };

        let Some(claims) = credential.unverified_claims() else {
            return Ok(CredentialDrift::Opaque);
        };

        let drift = match self.provider.get_user().await? {
            None => CredentialDrift::ProviderSignedOut,
            Some(user) if user.id == claims.sub => CredentialDrift::InSync,
            Some(user) => CredentialDrift::PrincipalMismatch {
                credential_subject: claims.sub,
                provider_subject: user.id,
            },
        };

        if drift.is_drifted() {
            tracing::warn!(?drift, "Stored credential does not match provider session");
        }
        Ok(drift)
    }

    fn remember(&self, data: &AuthData) -> Result<()> {
        match &data.session {
            Some(session) => self.credentials.store(session),
            None => Ok(()),
        }
    }
}
