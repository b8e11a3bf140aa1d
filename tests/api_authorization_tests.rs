// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request signing and authorization-failure handling.
//!
//! These tests verify that:
//! 1. A stored credential is sent as `Authorization: Bearer <token>`
//! 2. Without a credential no `Authorization` header is sent
//! 3. A 401 clears the credential and redirects to the login page once
//! 4. Other failures leave the credential alone and never redirect

use careportal::error::PortalError;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{test_portal, FakeProvider};

#[tokio::test]
async fn test_stored_credential_is_sent_as_bearer() {
    let server = MockServer::start().await;
    let (portal, _, _) = test_portal(&server.uri(), FakeProvider::default());
    portal.credentials.set_token("stored-token").unwrap();

    Mock::given(method("GET"))
        .and(path("/healthcare/patients"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let patients = portal.api.healthcare().get_patients().await.unwrap();
    assert!(patients.is_empty());
}

#[tokio::test]
async fn test_no_credential_sends_no_authorization_header() {
    let server = MockServer::start().await;
    let (portal, _, _) = test_portal(&server.uri(), FakeProvider::default());

    Mock::given(method("GET"))
        .and(path("/research/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    portal.api.research().get_projects().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_credential_change_applies_to_next_request() {
    let server = MockServer::start().await;
    let (portal, _, _) = test_portal(&server.uri(), FakeProvider::default());

    Mock::given(method("GET"))
        .and(path("/ai/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    portal.credentials.set_token("first").unwrap();
    portal.api.ai().get_models().await.unwrap();
    portal.credentials.set_token("second").unwrap();
    portal.api.ai().get_models().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("authorization").unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(sent, vec!["Bearer first", "Bearer second"]);
}

#[tokio::test]
async fn test_unauthorized_clears_credential_and_redirects_once() {
    let server = MockServer::start().await;
    let (portal, _, navigator) = test_portal(&server.uri(), FakeProvider::default());
    portal.credentials.set_token("expired-token").unwrap();

    Mock::given(method("GET"))
        .and(path("/telemed/consultations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "expired" })))
        .mount(&server)
        .await;

    let result = portal.api.telemed().get_consultations().await;

    assert!(matches!(result, Err(PortalError::Unauthorized)));
    assert!(portal.credentials.token().is_none());
    assert_eq!(navigator.paths(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_without_credential_still_redirects() {
    let server = MockServer::start().await;
    let (portal, _, navigator) = test_portal(&server.uri(), FakeProvider::default());

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = portal.api.auth().get_current_user().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(navigator.paths(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_server_error_keeps_credential() {
    let server = MockServer::start().await;
    let (portal, _, navigator) = test_portal(&server.uri(), FakeProvider::default());
    portal.credentials.set_token("good-token").unwrap();

    Mock::given(method("GET"))
        .and(path("/healthcare/appointments"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let err = portal.api.healthcare().get_appointments().await.unwrap_err();

    match err {
        PortalError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(portal.credentials.token().unwrap().as_str(), "good-token");
    assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn test_forbidden_keeps_credential() {
    let server = MockServer::start().await;
    let (portal, _, navigator) = test_portal(&server.uri(), FakeProvider::default());
    portal.credentials.set_token("good-token").unwrap();

    Mock::given(method("GET"))
        .and(path("/ai/agents"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = portal.api.ai().get_agents().await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert!(!err.is_unauthorized());
    assert!(portal.credentials.token().is_some());
    assert!(navigator.paths().is_empty());
}

#[tokio::test]
async fn test_network_failure_keeps_credential() {
    // Nothing listens on port 1
    let (portal, _, navigator) = test_portal("http://127.0.0.1:1", FakeProvider::default());
    portal.credentials.set_token("good-token").unwrap();

    let err = portal.api.healthcare().get_patients().await.unwrap_err();

    assert!(matches!(err, PortalError::Network(_)));
    assert_eq!(portal.credentials.token().unwrap().as_str(), "good-token");
    assert!(navigator.paths().is_empty());
}
