// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - identity and backend access.

pub mod api;
pub mod gate;
pub mod identity;
pub mod supabase;

pub use api::ApiClient;
pub use gate::{CredentialDrift, SessionGate};
pub use identity::IdentityProvider;
pub use supabase::SupabaseAuth;
