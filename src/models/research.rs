// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Research projects and their datasets.

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{PortalError, Result};

/// Research project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchProject {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// `POST /research/projects` body.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}

/// Dataset uploaded to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub size_bytes: Option<u64>,
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Dataset file plus metadata, sent as `multipart/form-data`.
#[derive(Clone, Validate)]
pub struct DatasetUpload {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1))]
    pub file_name: String,
    /// MIME type of `bytes`, e.g. `text/csv`
    #[validate(length(min = 1))]
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DatasetUpload {
    /// Build the multipart form: text parts `name` and `description`, file part `file`.
    pub fn into_form(self) -> Result<Form> {
        let file = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| PortalError::Decode(format!("invalid dataset content type: {e}")))?;

        let mut form = Form::new().text("name", self.name);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        Ok(form.part("file", file))
    }
}
