// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! AI platform models: models, agents, agent interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiModel {
    pub id: String,
    pub name: String,
    pub provider: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub name: String,
    pub model_id: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// `POST /ai/agents` body.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct NewAgent {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1))]
    pub model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 20000))]
    pub instructions: Option<String>,
}

/// `POST /ai/agents/{agentId}/interact` body.
///
/// `input` is free-form: a prompt string or whatever structured payload the
/// agent accepts.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct AgentInput {
    #[validate(custom(function = "validate_agent_input"))]
    pub input: Value,
}

fn validate_agent_input(input: &Value) -> Result<(), ValidationError> {
    let empty = match input {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    };
    if empty {
        return Err(ValidationError::new("empty_agent_input"));
    }
    Ok(())
}

/// Agent reply. `metadata` carries whatever extra the agent attaches.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentReply {
    pub output: String,
    #[serde(default)]
    pub metadata: Option<Value>,
}
