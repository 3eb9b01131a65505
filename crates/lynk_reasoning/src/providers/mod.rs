pub mod gemini;
pub mod groq;
mod http;
pub mod huggingface;
pub mod offline;

pub use gemini::GeminiClient;
pub use groq::GroqClient;
pub use huggingface::HuggingFaceClient;
pub use offline::OfflineProvider;

use crate::fallback::FallbackChain;
use crate::llm::{CompletionParams, LlmClient};
use anyhow::Result;
use lynk_core::config::{LlmConfig, ProviderConfig, ProviderKind};
use std::sync::Arc;
use std::time::Duration;

/// Build the fallback chain described by `config`.
///
/// Network providers without an API key are skipped. When nothing usable
/// remains, or `offline` is set, the chain is the offline provider alone.
pub fn build_chain(config: &LlmConfig) -> Result<FallbackChain> {
    let timeout = Duration::from_secs(config.timeout_secs.max(1));
    let params = CompletionParams {
        max_tokens: config.max_tokens,
        temperature: config.temperature,
    };

    let mut chain = FallbackChain::new(timeout);
    if config.offline {
        tracing::info!("LLM offline mode enabled");
        chain.push(Arc::new(OfflineProvider::new()));
        return Ok(chain);
    }

    for provider in &config.providers {
        match build_provider(provider, &params, timeout)? {
            Some(client) => chain.push(client),
            None => tracing::warn!(
                "Skipping {:?} provider: env var {} is not set",
                provider.kind,
                provider.api_key_env.as_deref().unwrap_or("<none>")
            ),
        }
    }

    if chain.is_empty() {
        tracing::warn!("No LLM provider available, falling back to offline responses");
        chain.push(Arc::new(OfflineProvider::new()));
    }

    tracing::info!("LLM fallback chain: {}", chain.provider_names().join(" -> "));
    Ok(chain)
}

fn build_provider(
    provider: &ProviderConfig,
    params: &CompletionParams,
    timeout: Duration,
) -> Result<Option<Arc<dyn LlmClient>>> {
    if provider.kind == ProviderKind::Offline {
        return Ok(Some(Arc::new(OfflineProvider::new())));
    }

    let Some(api_key) = provider.api_key() else {
        return Ok(None);
    };
    let base_url = provider.base_url.as_deref();
    let params = params.clone();

    let client: Arc<dyn LlmClient> = match provider.kind {
        ProviderKind::Groq => Arc::new(GroqClient::new(api_key, &provider.model, base_url, params, timeout)?),
        ProviderKind::Gemini => Arc::new(GeminiClient::new(api_key, &provider.model, base_url, params, timeout)?),
        ProviderKind::HuggingFace => {
            Arc::new(HuggingFaceClient::new(api_key, &provider.model, base_url, params, timeout)?)
        }
        ProviderKind::Offline => Arc::new(OfflineProvider::new()),
    };
    Ok(Some(client))
}
