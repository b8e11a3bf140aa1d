// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Healthcare backend REST client.
//!
//! Every request passes through two interceptors:
//! - outgoing: attach `Authorization: Bearer <token>` when a credential is stored
//! - incoming: on 401, clear the credential and force navigation to the
//!   sign-in page, then fail the call with `PortalError::Unauthorized`
//!
//! Other failures are returned unchanged. Nothing is retried or cached.

pub mod ai;
pub mod auth;
pub mod healthcare;
pub mod research;
pub mod telemed;

pub use ai::AiApi;
pub use auth::AuthApi;
pub use healthcare::HealthcareApi;
pub use research::ResearchApi;
pub use telemed::TelemedApi;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::config::Config;
use crate::credentials::CredentialStore;
use crate::error::{PortalError, Result};
use crate::navigation::Navigator;

/// Backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    login_path: String,
    credentials: CredentialStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        config: &Config,
        credentials: CredentialStore,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
            credentials,
            navigator,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ─── Resource Groups ─────────────────────────────────────────────────────

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn healthcare(&self) -> HealthcareApi<'_> {
        HealthcareApi::new(self)
    }

    pub fn telemed(&self) -> TelemedApi<'_> {
        TelemedApi::new(self)
    }

    pub fn research(&self) -> ResearchApi<'_> {
        ResearchApi::new(self)
    }

    pub fn ai(&self) -> AiApi<'_> {
        AiApi::new(self)
    }

    // ─── Interceptors ────────────────────────────────────────────────────────

    /// Build a request for `path`, signed with the stored credential if any.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let request = self.http.request(method.clone(), url);

        match self.credentials.token() {
            Some(credential) => {
                tracing::debug!(%method, path, authenticated = true, "API request");
                request.bearer_auth(credential.as_str())
            }
            None => {
                tracing::debug!(%method, path, authenticated = false, "API request");
                request
            }
        }
    }

    /// Send a request and apply the response interceptor.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "API request failed");
            PortalError::Network(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(PortalError::Unauthorized);
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(status = %status, error = %e, "Failed to read error response body");
                String::new()
            }
        };
        let message = if body.is_empty() {
            status.to_string()
        } else {
            body
        };
        Err(PortalError::Http {
            status: status.as_u16(),
            message,
        })
    }

    /// Send a request and parse the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(body_error)
    }

    /// Authorization failure: drop the credential and force re-authentication.
    fn handle_unauthorized(&self) {
        tracing::warn!(login_path = %self.login_path, "Backend rejected credential (401), signing out locally");

        if let Err(e) = self.credentials.clear() {
            tracing::error!(error = %e, "Failed to clear credential after 401");
        }
        self.navigator.navigate(&self.login_path);
    }
}

/// A body that arrived but does not parse is a decode failure; anything else
/// while reading it is a network failure.
fn body_error(e: reqwest::Error) -> PortalError {
    if e.is_decode() {
        PortalError::Decode(e.to_string())
    } else {
        PortalError::Network(e)
    }
}

/// Percent-encode a path segment or query value.
pub(crate) fn encode(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
