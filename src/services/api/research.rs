// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Research system endpoints.

use reqwest::Method;
use validator::Validate;

use super::{encode, ApiClient};
use crate::error::Result;
use crate::models::{Dataset, DatasetUpload, NewProject, ResearchProject};

pub struct ResearchApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ResearchApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /research/projects`
    pub async fn get_projects(&self) -> Result<Vec<ResearchProject>> {
        let request = self.client.request(Method::GET, "/research/projects");
        self.client.send_json(request).await
    }

    /// `GET /research/projects/{id}`
    pub async fn get_project(&self, id: &str) -> Result<ResearchProject> {
        let path = format!("/research/projects/{}", encode(id));
        let request = self.client.request(Method::GET, &path);
        self.client.send_json(request).await
    }

    /// `POST /research/projects`
    pub async fn create_project(&self, project: &NewProject) -> Result<ResearchProject> {
        project.validate()?;
        let request = self
            .client
            .request(Method::POST, "/research/projects")
            .json(project);
        self.client.send_json(request).await
    }

    /// `GET /research/projects/{projectId}/datasets`
    pub async fn get_datasets(&self, project_id: &str) -> Result<Vec<Dataset>> {
        let path = format!("/research/projects/{}/datasets", encode(project_id));
        let request = self.client.request(Method::GET, &path);
        self.client.send_json(request).await
    }

    /// `POST /research/projects/{projectId}/datasets` as `multipart/form-data`.
    pub async fn upload_dataset(&self, project_id: &str, upload: DatasetUpload) -> Result<Dataset> {
        upload.validate()?;
        let form = upload.into_form()?;

        let path = format!("/research/projects/{}/datasets", encode(project_id));
        let request = self.client.request(Method::POST, &path).multipart(form);
        self.client.send_json(request).await
    }
}
