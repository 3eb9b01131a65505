use anyhow::Result;
use async_trait::async_trait;

/// Sampling parameters shared by every network provider.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.7,
        }
    }
}

/// Turns a prompt into text.
///
/// Provider implementations return `Err` for transport errors, non-2xx
/// statuses and malformed bodies; the fallback chain decides what to do next.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}
