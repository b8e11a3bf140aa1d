// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Telemedicine consultation model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A virtual consultation attached to an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: String,
    pub appointment_id: String,
    pub status: String,
    pub room_url: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
}
