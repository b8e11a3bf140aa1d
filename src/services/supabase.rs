// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Supabase (GoTrue) identity provider client.
//!
//! Handles:
//! - Email/password sign-up and sign-in
//! - Session-scoped user lookup and updates
//! - Sign-out and password recovery
//!
//! The live session is kept in memory here and is independent of the bearer
//! credential persisted by `CredentialStore`.

use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tokio::sync::RwLock;

use super::identity::IdentityProvider;
use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::models::{
    AuthData, PasswordCredentials, ProviderUser, Session, SignUpRequest, UserAttributes,
};

/// GoTrue REST client implementing `IdentityProvider`.
pub struct SupabaseAuth {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
    session: RwLock<Option<Session>>,
}

impl SupabaseAuth {
    /// Create a client for the project configured in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            auth_url: format!("{}/auth/v1", config.supabase_url.trim_end_matches('/')),
            anon_key: config.supabase_anon_key.clone(),
            session: RwLock::new(None),
        })
    }

    /// Snapshot of the live session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    async fn access_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .map(|s| s.access_token.clone())
    }

    /// Request authorized with the project's anon key.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.auth_url, path))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Request authorized as the signed-in user.
    fn user_request(&self, method: Method, path: &str, access_token: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.auth_url, path))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
    }

    /// Check response status and return a provider error if not successful.
    async fn check_response(&self, response: Response) -> Result<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = %status, "Identity provider rejected request");
        Err(PortalError::from_provider_body(status, &body))
    }

    /// Check response and parse JSON body.
    async fn check_response_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        self.check_response(response)
            .await?
            .json()
            .await
            .map_err(|e| PortalError::Decode(format!("identity provider response: {e}")))
    }

    async fn install_session(&self, session: Session) -> AuthData {
        tracing::info!(user_id = %session.user.id, "Identity session established");
        *self.session.write().await = Some(session.clone());
        AuthData {
            user: Some(session.user.clone()),
            session: Some(session),
        }
    }
}

/// Sign-up answers with a session when email confirmation is disabled and
/// with the bare user otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(ProviderUser),
}

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: SignUpMetadata<'a>,
}

#[derive(Serialize)]
struct SignUpMetadata<'a> {
    role: &'a str,
}

#[async_trait]
impl IdentityProvider for SupabaseAuth {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthData> {
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: SignUpMetadata {
                role: &request.role,
            },
        };

        let response = self
            .request(Method::POST, "/signup")
            .json(&body)
            .send()
            .await?;

        match self.check_response_json(response).await? {
            SignUpResponse::Session(session) => Ok(self.install_session(session).await),
            SignUpResponse::User(user) => {
                tracing::info!(user_id = %user.id, "Sign-up pending email confirmation");
                Ok(AuthData {
                    user: Some(user),
                    session: None,
                })
            }
        }
    }

    async fn sign_in_with_password(&self, credentials: &PasswordCredentials) -> Result<AuthData> {
        let response = self
            .request(Method::POST, "/token")
            .query(&[("grant_type", "password")])
            .json(credentials)
            .send()
            .await?;

        let session: Session = self.check_response_json(response).await?;
        Ok(self.install_session(session).await)
    }

    async fn sign_out(&self) -> Result<()> {
        let Some(token) = self.access_token().await else {
            return Ok(());
        };

        let response = self
            .user_request(Method::POST, "/logout", &token)
            .query(&[("scope", "global")])
            .send()
            .await?;

        let status = response.status();
        if status.is_success()
            || matches!(
                status,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND
            )
        {
            // Session already gone on the provider side counts as signed out.
            *self.session.write().await = None;
            tracing::info!("Identity session ended");
            return Ok(());
        }

        self.check_response(response).await.map(|_| ())
    }

    async fn get_user(&self) -> Result<Option<ProviderUser>> {
        let Some(token) = self.access_token().await else {
            return Ok(None);
        };

        let response = self
            .user_request(Method::GET, "/user", &token)
            .send()
            .await?;

        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            tracing::debug!(status = %response.status(), "Provider session no longer valid");
            return Ok(None);
        }

        self.check_response_json(response).await.map(Some)
    }

    async fn update_user(&self, attributes: &UserAttributes) -> Result<ProviderUser> {
        let token = self
            .access_token()
            .await
            .ok_or(PortalError::SessionMissing)?;

        let response = self
            .user_request(Method::PUT, "/user", &token)
            .json(attributes)
            .send()
            .await?;

        let user: ProviderUser = self.check_response_json(response).await?;

        if let Some(session) = self.session.write().await.as_mut() {
            session.user = user.clone();
        }
        Ok(user)
    }

    async fn reset_password_for_email(&self, email: &str) -> Result<()> {
        let response = self
            .request(Method::POST, "/recover")
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await?;

        self.check_response(response).await?;
        tracing::info!("Password recovery email requested");
        Ok(())
    }
}
