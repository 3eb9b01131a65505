//! Ordered provider fallback.
//!
//! Providers are tried one at a time, highest priority first. The first
//! success wins; a failure or timeout moves on to the next provider. When the
//! chain is exhausted the caller still gets text: [`GENERATION_FAILED`].

use crate::llm::LlmClient;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// Returned when every provider in the chain failed.
pub const GENERATION_FAILED: &str = "AI generation failed - all providers unavailable";

pub struct FallbackChain {
    providers: Vec<Arc<dyn LlmClient>>,
    timeout: Duration,
}

impl FallbackChain {
    /// `timeout` bounds each provider call separately.
    pub fn new(timeout: Duration) -> Self {
        Self {
            providers: Vec::new(),
            timeout,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn LlmClient>) -> Self {
        self.push(provider);
        self
    }

    /// Append a provider at the lowest priority.
    pub fn push(&mut self, provider: Arc<dyn LlmClient>) {
        self.providers.push(provider);
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Generate text, never failing.
    ///
    /// Dropping the returned future cancels the in-flight provider call and
    /// the rest of the chain with it.
    pub async fn generate_text(&self, prompt: &str) -> String {
        for (attempt, provider) in self.providers.iter().enumerate() {
            match tokio::time::timeout(self.timeout, provider.generate(prompt)).await {
                Ok(Ok(text)) => {
                    if attempt > 0 {
                        tracing::info!(
                            "{} succeeded after {} failed provider(s)",
                            provider.name(),
                            attempt
                        );
                    }
                    return text;
                }
                Ok(Err(e)) => {
                    tracing::warn!("{} failed, falling back: {:#}", provider.name(), e);
                }
                Err(_) => {
                    tracing::warn!(
                        "{} timed out after {:.1}s, falling back",
                        provider.name(),
                        self.timeout.as_secs_f64()
                    );
                }
            }
        }

        tracing::error!("All LLM providers failed ({} tried)", self.providers.len());
        GENERATION_FAILED.to_string()
    }
}

#[async_trait::async_trait]
impl LlmClient for FallbackChain {
    fn name(&self) -> &str {
        "fallback"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_text(prompt).await)
    }
}
