// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity provider boundary.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{AuthData, PasswordCredentials, ProviderUser, SignUpRequest, UserAttributes};

/// External service of record for authentication.
///
/// Implementations own the provider's live session; callers never see it
/// except through the `AuthData` returned by sign-in and sign-up.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthData>;

    async fn sign_in_with_password(&self, credentials: &PasswordCredentials) -> Result<AuthData>;

    /// End the live session. A no-op when none exists.
    async fn sign_out(&self) -> Result<()>;

    /// User of the live session, or `None` when there is no usable session.
    async fn get_user(&self) -> Result<Option<ProviderUser>>;

    /// Fails with `PortalError::SessionMissing` when nobody is signed in.
    async fn update_user(&self, attributes: &UserAttributes) -> Result<ProviderUser>;

    async fn reset_password_for_email(&self, email: &str) -> Result<()>;
}
