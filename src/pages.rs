// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Page-level load handlers for the landing page and the dashboard shell.
//!
//! These are the outermost callers: they log failures and degrade to a
//! signed-out or empty view instead of propagating.

use crate::models::User;
use crate::navigation::{Navigator, DASHBOARD_PATH, HOME_PATH, LOGIN_PATH};
use crate::services::SessionGate;

/// Landing page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingView {
    #[default]
    Loading,
    SignedOut,
    SignedIn,
}

impl LandingView {
    /// Where the primary call to action leads.
    pub fn primary_link(&self) -> Option<&'static str> {
        match self {
            LandingView::Loading => None,
            LandingView::SignedOut => Some(LOGIN_PATH),
            LandingView::SignedIn => Some(DASHBOARD_PATH),
        }
    }
}

/// Dashboard page state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Loading,
    /// `user` is `None` when nobody is signed in or the lookup failed.
    Ready { user: Option<User> },
}

impl DashboardView {
    pub fn user(&self) -> Option<&User> {
        match self {
            DashboardView::Ready { user } => user.as_ref(),
            DashboardView::Loading => None,
        }
    }
}

/// Product module linked from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardModule {
    pub name: &'static str,
    pub path: &'static str,
    pub summary: &'static str,
}

pub const DASHBOARD_MODULES: &[DashboardModule] = &[
    DashboardModule {
        name: "OmniCognitor",
        path: "/dashboard/omnicognitor",
        summary: "AI platform integrating AI agents",
    },
    DashboardModule {
        name: "Healthcare Hub",
        path: "/dashboard/healthcare",
        summary: "Patient and provider management",
    },
    DashboardModule {
        name: "Telemed Services",
        path: "/dashboard/telemed",
        summary: "Virtual consultations and appointments",
    },
    DashboardModule {
        name: "M23M Research",
        path: "/dashboard/research",
        summary: "Research data management and collaboration",
    },
];

/// Resolve the landing page's auth state.
///
/// A signed-in visitor is sent straight on to the dashboard.
pub async fn load_landing(gate: &SessionGate, navigator: &dyn Navigator) -> LandingView {
    match gate.get_current_user().await {
        Ok(Some(_)) => {
            navigator.navigate(DASHBOARD_PATH);
            LandingView::SignedIn
        }
        Ok(None) => LandingView::SignedOut,
        Err(e) => {
            tracing::error!(error = %e, "Auth check failed");
            LandingView::SignedOut
        }
    }
}

/// Load the dashboard's current user.
pub async fn load_dashboard(gate: &SessionGate) -> DashboardView {
    let user = match gate.get_current_user().await {
        Ok(user) => user,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load user");
            None
        }
    };
    DashboardView::Ready { user }
}

/// Dashboard sign-out button: sign out, then go home.
///
/// Returns whether sign-out succeeded. On failure the page stays put; the
/// credential has been cleared regardless.
pub async fn sign_out_from_dashboard(gate: &SessionGate, navigator: &dyn Navigator) -> bool {
    match gate.sign_out().await {
        Ok(()) => {
            navigator.navigate(HOME_PATH);
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Sign out failed");
            false
        }
    }
}
