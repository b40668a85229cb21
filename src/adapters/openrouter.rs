use crate::config::ApiSettings;
use crate::domain::ports::TextGenerator;
use crate::utils::error::{GenerationError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: Vec<ContentBlock<'a>>,
}

#[derive(Debug, Serialize)]
struct ContentBlock<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

/// Chat-completions client for OpenRouter (or any endpoint speaking the
/// same request and response shape).
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    settings: ApiSettings,
}

impl OpenRouterClient {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }
}

#[async_trait]
impl TextGenerator for OpenRouterClient {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.settings.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![ContentBlock {
                    kind: "text",
                    text: prompt,
                }],
            }],
        };

        tracing::debug!(
            "Sending completion request to {} (model {})",
            self.settings.endpoint,
            self.settings.model
        );

        let response = self
            .client
            .post(&self.settings.endpoint)
            .bearer_auth(&self.settings.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        let response = response.error_for_status()?;

        let json: serde_json::Value = match response.json().await {
            Ok(json) => json,
            Err(e) if e.is_decode() => {
                tracing::debug!("Response body is not JSON: {}", e);
                return Err(GenerationError::InvalidResponse);
            }
            Err(e) => return Err(e.into()),
        };

        json["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or(GenerationError::InvalidResponse)
    }
}
