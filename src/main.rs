// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CarePortal smoke check
//!
//! Resolves the dashboard's signed-in user and, when signed in, lists the
//! patients visible to that credential. Set `PORTAL_EMAIL` and
//! `PORTAL_PASSWORD` to sign in first.

use careportal::{config::Config, pages, Portal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(backend = %config.backend_url, "Starting CarePortal smoke check");

    let portal = Portal::from_config(config)?;

    if let (Ok(email), Ok(password)) = (
        std::env::var("PORTAL_EMAIL"),
        std::env::var("PORTAL_PASSWORD"),
    ) {
        let data = portal.gate.sign_in(&email, &password).await?;
        tracing::info!(
            session = data.session.is_some(),
            "Signed in with identity provider"
        );
    }

    let landing = pages::load_landing(&portal.gate, portal.navigator.as_ref()).await;
    tracing::info!(view = ?landing, "Landing page resolved");

    let dashboard = pages::load_dashboard(&portal.gate).await;
    let Some(user) = dashboard.user() else {
        tracing::info!("No signed-in user, nothing else to check");
        return Ok(());
    };
    tracing::info!(user_id = %user.id, role = %user.role, "Dashboard user loaded");

    if let Ok(drift) = portal.gate.credential_drift().await {
        tracing::info!(?drift, "Credential drift check");
    }

    match portal.api.healthcare().get_patients().await {
        Ok(patients) => tracing::info!(count = patients.len(), "Patients fetched"),
        Err(e) => tracing::error!(error = %e, "Patient fetch failed"),
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("careportal=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
