// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! CarePortal: session gate and typed REST client for the healthcare
//! platform (patients, appointments, consultations, research projects,
//! AI agents).
//!
//! Authentication is delegated to an external identity provider; the bearer
//! credential it issues is persisted by [`credentials::CredentialStore`] and
//! attached to every backend request by [`services::ApiClient`].

pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod navigation;
pub mod pages;
pub mod services;
pub mod storage;

use std::sync::Arc;

use config::Config;
use credentials::CredentialStore;
use error::Result;
use navigation::{Navigator, TracingNavigator};
use services::{ApiClient, IdentityProvider, SessionGate, SupabaseAuth};
use storage::{FileStore, KeyValueStore, MemoryStore};

/// Shared client state.
#[derive(Clone)]
pub struct Portal {
    pub config: Config,
    pub credentials: CredentialStore,
    pub gate: SessionGate,
    pub api: ApiClient,
    pub navigator: Arc<dyn Navigator>,
}

impl Portal {
    /// Wire the gate and API client around one credential store.
    pub fn new(
        config: Config,
        provider: Arc<dyn IdentityProvider>,
        storage: Arc<dyn KeyValueStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let credentials = CredentialStore::new(storage);
        let gate = SessionGate::new(provider, credentials.clone());
        let api = ApiClient::new(&config, credentials.clone(), navigator.clone())?;

        Ok(Self {
            config,
            credentials,
            gate,
            api,
            navigator,
        })
    }

    /// Production wiring: Supabase identity provider, file-backed credential
    /// when `CREDENTIAL_STORE_PATH` is set, log-only navigation.
    pub fn from_config(config: Config) -> Result<Self> {
        let provider = Arc::new(SupabaseAuth::new(&config)?);

        let storage: Arc<dyn KeyValueStore> = match &config.credential_store_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using file credential store");
                Arc::new(FileStore::new(path.clone()))
            }
            None => Arc::new(MemoryStore::new()),
        };

        Self::new(config, provider, storage, Arc::new(TracingNavigator))
    }
}
