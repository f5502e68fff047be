//! Gemini `generateContent` client.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::Assistant;
use crate::error::AssistantError;
use crate::storage::AssistantConfig;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// # Errors
    /// Fails if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: &AssistantConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// Build a client with the key from the environment or keyring.
    ///
    /// # Errors
    /// [`AssistantError::MissingApiKey`] if no key is configured.
    pub fn from_config(config: &AssistantConfig) -> Result<Self, AssistantError> {
        Self::new(super::credentials::api_key()?, config)
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }
}

impl Assistant for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AssistantError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!(model = %self.model, "sending generateContent request");
        let resp = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = resp.json().await?;
        parsed.text().ok_or(AssistantError::EmptyResponse)
    }
}
