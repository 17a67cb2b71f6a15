//! Gemini generator
//!
//! Sends prompts to the generation endpoint and returns the raw predictions
//! payload. Model selection comes from the criteria table; the request is
//! bounded by the configured timeout so a slow backend cannot stall callers.

use super::Generator;
use crate::error::Result;
use crate::selector;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Generation API endpoint.
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/generate";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

/// Generator backed by the Gemini generation API.
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: &'static str,
}

impl GeminiGenerator {
    /// Create a generator using the default text model.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
            endpoint: GEMINI_API_URL.to_string(),
            model: selector::DEFAULT_MODEL,
        }
    }

    /// Override the endpoint (used against local stand-ins).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Select the model from (input type, task type) criteria.
    pub fn for_criteria(mut self, input_type: &str, task_type: &str) -> Self {
        self.model = selector::select_model(input_type, task_type);
        self
    }

    pub fn model(&self) -> &str {
        self.model
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Value> {
        let payload = GenerateRequest {
            model: self.model,
            prompt,
        };

        debug!(model = self.model, prompt_len = prompt.len(), "Sending generation request");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        Ok(body)
    }
}
