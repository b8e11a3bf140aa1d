// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI platform endpoints.

use reqwest::Method;
use serde_json::Value;
use validator::Validate;

use super::{encode, ApiClient};
use crate::error::Result;
use crate::models::{Agent, AgentInput, AgentReply, AiModel, NewAgent};

pub struct AiApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AiApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /ai/models`
    pub async fn get_models(&self) -> Result<Vec<AiModel>> {
        let request = self.client.request(Method::GET, "/ai/models");
        self.client.send_json(request).await
    }

    /// `GET /ai/agents`
    pub async fn get_agents(&self) -> Result<Vec<Agent>> {
        let request = self.client.request(Method::GET, "/ai/agents");
        self.client.send_json(request).await
    }

    /// `POST /ai/agents`
    pub async fn create_agent(&self, agent: &NewAgent) -> Result<Agent> {
        agent.validate()?;
        let request = self.client.request(Method::POST, "/ai/agents").json(agent);
        self.client.send_json(request).await
    }

    /// `POST /ai/agents/{agentId}/interact`
    ///
    /// `input` may be a plain prompt or any JSON payload the agent accepts.
    pub async fn interact_with_agent(
        &self,
        agent_id: &str,
        input: impl Into<Value>,
    ) -> Result<AgentReply> {
        let body = AgentInput {
            input: input.into(),
        };
        body.validate()?;

        let path = format!("/ai/agents/{}/interact", encode(agent_id));
        let request = self.client.request(Method::POST, &path).json(&body);
        self.client.send_json(request).await
    }
}
