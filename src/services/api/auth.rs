// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend `/auth` endpoints.
//!
//! These never touch the stored credential; only `SessionGate` does.

use reqwest::Method;
use validator::Validate;

use super::ApiClient;
use crate::error::Result;
use crate::models::{BackendToken, LoginRequest, RegisterRequest, User};

pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<BackendToken> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        body.validate()?;

        let request = self.client.request(Method::POST, "/auth/login").json(&body);
        self.client.send_json(request).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, email: &str, password: &str, role: &str) -> Result<BackendToken> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };
        body.validate()?;

        let request = self
            .client
            .request(Method::POST, "/auth/register")
            .json(&body);
        self.client.send_json(request).await
    }

    /// `GET /auth/me`
    pub async fn get_current_user(&self) -> Result<User> {
        let request = self.client.request(Method::GET, "/auth/me");
        self.client.send_json(request).await
    }
}
