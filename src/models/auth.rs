// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Backend `/auth` payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::User;

/// `POST /auth/login` body.
#[derive(Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1, max = 64))]
    pub role: String,
}

/// Token issued by the backend's own auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
