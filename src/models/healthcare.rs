// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Healthcare hub models: patients, appointments, medical records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Patient record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// `POST /healthcare/patients` body.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewPatient {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 32))]
    pub phone: Option<String>,
}

/// `PUT /healthcare/patients/{id}` body. Only present fields are sent.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 32))]
    pub phone: Option<String>,
}

/// Scheduled appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub provider_id: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    pub status: Option<String>,
    pub reason: Option<String>,
}

/// `POST /healthcare/appointments` body.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewAppointment {
    #[validate(length(min = 1))]
    pub patient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 5, max = 480))]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

/// Entry in a patient's medical history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub record_type: String,
    pub summary: Option<String>,
    pub recorded_at: Option<DateTime<Utc>>,
}
