// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Healthcare hub endpoints.

use reqwest::Method;
use validator::Validate;

use super::{encode, ApiClient};
use crate::error::Result;
use crate::models::{
    Appointment, MedicalRecord, NewAppointment, NewPatient, Patient, PatientUpdate,
};

pub struct HealthcareApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HealthcareApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /healthcare/patients`
    pub async fn get_patients(&self) -> Result<Vec<Patient>> {
        let request = self.client.request(Method::GET, "/healthcare/patients");
        self.client.send_json(request).await
    }

    /// `GET /healthcare/patients/{id}`
    pub async fn get_patient(&self, id: &str) -> Result<Patient> {
        let path = format!("/healthcare/patients/{}", encode(id));
        let request = self.client.request(Method::GET, &path);
        self.client.send_json(request).await
    }

    /// `POST /healthcare/patients`
    pub async fn create_patient(&self, patient: &NewPatient) -> Result<Patient> {
        patient.validate()?;
        let request = self
            .client
            .request(Method::POST, "/healthcare/patients")
            .json(patient);
        self.client.send_json(request).await
    }

    /// `PUT /healthcare/patients/{id}`
    pub async fn update_patient(&self, id: &str, update: &PatientUpdate) -> Result<Patient> {
        update.validate()?;
        let path = format!("/healthcare/patients/{}", encode(id));
        let request = self.client.request(Method::PUT, &path).json(update);
        self.client.send_json(request).await
    }

    /// `GET /healthcare/appointments`
    pub async fn get_appointments(&self) -> Result<Vec<Appointment>> {
        let request = self.client.request(Method::GET, "/healthcare/appointments");
        self.client.send_json(request).await
    }

    /// `POST /healthcare/appointments`
    pub async fn create_appointment(&self, appointment: &NewAppointment) -> Result<Appointment> {
        appointment.validate()?;
        let request = self
            .client
            .request(Method::POST, "/healthcare/appointments")
            .json(appointment);
        self.client.send_json(request).await
    }

    /// `GET /healthcare/medical-records?patient_id={id}`
    pub async fn get_medical_records(&self, patient_id: &str) -> Result<Vec<MedicalRecord>> {
        let path = format!(
            "/healthcare/medical-records?patient_id={}",
            encode(patient_id)
        );
        let request = self.client.request(Method::GET, &path);
        self.client.send_json(request).await
    }
}
