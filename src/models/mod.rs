// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the identity provider and the backend API.

pub mod ai;
pub mod auth;
pub mod healthcare;
pub mod research;
pub mod telemed;
pub mod user;

pub use ai::{Agent, AgentInput, AgentReply, AiModel, NewAgent};
pub use auth::{BackendToken, LoginRequest, RegisterRequest};
pub use healthcare::{Appointment, MedicalRecord, NewAppointment, NewPatient, Patient, PatientUpdate};
pub use research::{Dataset, DatasetUpload, NewProject, ResearchProject};
pub use telemed::Consultation;
pub use user::{
    AuthData, PasswordCredentials, ProviderUser, Session, SignUpRequest, User, UserAttributes,
    DEFAULT_ROLE,
};
