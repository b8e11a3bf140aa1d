// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Telemedicine endpoints.

use reqwest::Method;

use super::{encode, ApiClient};
use crate::error::Result;
use crate::models::Consultation;

pub struct TelemedApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TelemedApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /telemed/consultations`
    pub async fn get_consultations(&self) -> Result<Vec<Consultation>> {
        let request = self.client.request(Method::GET, "/telemed/consultations");
        self.client.send_json(request).await
    }

    /// `POST /telemed/consultations/{appointmentId}/start`
    pub async fn start_consultation(&self, appointment_id: &str) -> Result<Consultation> {
        let path = format!("/telemed/consultations/{}/start", encode(appointment_id));
        self.post_empty(&path).await
    }

    /// `POST /telemed/consultations/{consultationId}/end`
    pub async fn end_consultation(&self, consultation_id: &str) -> Result<Consultation> {
        let path = format!("/telemed/consultations/{}/end", encode(consultation_id));
        self.post_empty(&path).await
    }

    /// State transitions carry an empty JSON object as body.
    async fn post_empty(&self, path: &str) -> Result<Consultation> {
        let request = self
            .client
            .request(Method::POST, path)
            .json(&serde_json::json!({}));
        self.client.send_json(request).await
    }
}
