use super::http::{build_client, send_json, trim_base_url};
use crate::api_types::{inference_text, InferenceOutput, InferenceParameters, InferenceRequest};
use crate::llm::{CompletionParams, LlmClient};
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// HuggingFace hosted inference for text-generation models.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_key: String,
    endpoint: String,
    params: CompletionParams,
}

impl HuggingFaceClient {
    pub fn new(
        api_key: String,
        model: &str,
        base_url: Option<&str>,
        params: CompletionParams,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = trim_base_url(base_url, DEFAULT_BASE_URL);
        Ok(Self {
            client: build_client(timeout)?,
            api_key,
            endpoint: format!("{}/{}", base_url, model),
            params,
        })
    }
}

#[async_trait::async_trait]
impl LlmClient for HuggingFaceClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = InferenceRequest {
            inputs: prompt,
            parameters: InferenceParameters {
                max_new_tokens: self.params.max_tokens,
                temperature: self.params.temperature,
                return_full_text: false,
            },
        };

        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload);

        let outputs: Vec<InferenceOutput> = send_json(request, self.name()).await?;
        inference_text(outputs)
    }
}
