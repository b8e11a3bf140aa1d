// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client configuration loaded from environment variables.
//!
//! Every variable also accepts the `NEXT_PUBLIC_` spelling used by the web
//! frontend, so one `.env` file can serve both.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Backend used when no override is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the healthcare backend REST API (no trailing slash)
    pub backend_url: String,
    /// Base URL of the identity provider project
    pub supabase_url: String,
    /// Public (anon) API key of the identity provider project
    pub supabase_anon_key: String,
    /// Durable credential file; `None` keeps the credential in memory
    pub credential_store_path: Option<PathBuf>,
    /// Timeout applied to every outgoing HTTP request
    pub request_timeout: Duration,
    /// Sign-in entry point used for forced re-authentication
    pub login_path: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test_anon_key".to_string(),
            credential_store_path: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            login_path: crate::navigation::LOGIN_PATH.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let backend_url = var_with_public_fallback("BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Ok(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            supabase_url: var_with_public_fallback("SUPABASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .ok_or(ConfigError::Missing("SUPABASE_URL"))?,
            supabase_anon_key: var_with_public_fallback("SUPABASE_ANON_KEY")
                .map(|v| v.trim().to_string())
                .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?,
            credential_store_path: env::var("CREDENTIAL_STORE_PATH").ok().map(PathBuf::from),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            login_path: env::var("LOGIN_PATH")
                .unwrap_or_else(|_| crate::navigation::LOGIN_PATH.to_string()),
        })
    }
}

/// Read `NAME`, falling back to `NEXT_PUBLIC_NAME`. Empty values count as unset.
fn var_with_public_fallback(name: &str) -> Option<String> {
    env::var(name)
        .or_else(|_| env::var(format!("NEXT_PUBLIC_{name}")))
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
