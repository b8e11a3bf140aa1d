// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forced navigation hook.

/// Sign-in entry point.
pub const LOGIN_PATH: &str = "/login";

/// Landing page; where a successful dashboard sign-out goes.
pub const HOME_PATH: &str = "/";

/// Dashboard shell; where a signed-in visitor to the landing page goes.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Receives forced navigations (re-authentication, post sign-out).
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Navigator for headless use: records the navigation in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, path: &str) {
        tracing::info!(path, "Navigation requested");
    }
}
