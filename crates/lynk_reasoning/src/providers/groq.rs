use super::http::{build_client, send_json, trim_base_url};
use crate::api_types::{ChatMessage, ChatRequest, ChatResponse};
use crate::llm::{CompletionParams, LlmClient};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Groq's OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    params: CompletionParams,
}

impl GroqClient {
    pub fn new(
        api_key: String,
        model: &str,
        base_url: Option<&str>,
        params: CompletionParams,
        timeout: Duration,
    ) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            base_url: trim_base_url(base_url, DEFAULT_BASE_URL),
            model: model.to_string(),
            params,
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for GroqClient {
    fn name(&self) -> &str {
        "groq"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        };

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload);

        let response: ChatResponse = send_json(request, self.name()).await?;
        response.into_text()
    }
}
