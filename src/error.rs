// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types shared by the session gate and the API client.

use serde::Deserialize;

/// Error type returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// The identity provider rejected the call (bad credentials, duplicate
    /// registration, ...).
    #[error("Identity provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    #[error("No active identity session")]
    SessionMissing,

    /// Backend answered 401. The stored credential has already been cleared
    /// and re-authentication requested by the time this is returned.
    #[error("Authentication required")]
    Unauthorized,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Response decode error: {0}")]
    Decode(String),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PortalError {
    /// True for backend authorization failures.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PortalError::Unauthorized)
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            PortalError::Provider { status, .. } | PortalError::Http { status, .. } => {
                Some(*status)
            }
            PortalError::Unauthorized => Some(401),
            PortalError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Build a provider error from a failed identity provider response body.
    pub(crate) fn from_provider_body(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ProviderErrorBody>(body)
            .ok()
            .and_then(ProviderErrorBody::into_message)
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body.to_string()
                }
            });

        PortalError::Provider {
            status: status.as_u16(),
            message,
        }
    }
}

/// Error payload shapes emitted by GoTrue-compatible identity providers.
#[derive(Deserialize)]
struct ProviderErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

impl ProviderErrorBody {
    fn into_message(self) -> Option<String> {
        self.msg
            .or(self.message)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_provider_message_preference() {
        let err = PortalError::from_provider_body(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        match err {
            PortalError::Provider { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid login credentials");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_provider_message_falls_back_to_body() {
        let err = PortalError::from_provider_body(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Identity provider error (502): upstream down");

        let err = PortalError::from_provider_body(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_is_unauthorized() {
        assert!(PortalError::Unauthorized.is_unauthorized());
        assert!(!PortalError::Http {
            status: 403,
            message: "forbidden".to_string()
        }
        .is_unauthorized());
    }
}
