use super::http::{build_client, send_json, trim_base_url};
use crate::api_types::{
    GeminiContent, GeminiPart, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::llm::{CompletionParams, LlmClient};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    params: CompletionParams,
}

impl GeminiClient {
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
impl LlmClient for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = GenerateContentRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.params.temperature,
                max_output_tokens: self.params.max_tokens,
            },
        };

        let request = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, self.model))
            .query(&[("key", self.api_key.as_str())])
            .json(&payload);

        let response: GenerateContentResponse = send_json(request, self.name()).await?;
        response.into_text()
    }
}
