//! Shared HTTP handling for network providers.
//!
//! One attempt per call: a non-2xx status or an undecodable body is an error
//! and the fallback chain moves on to the next provider.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Send `request` and decode a successful JSON body into `T`.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider_name: &str,
) -> Result<T> {
    let response = request
        .send()
        .await
        .with_context(|| format!("Failed to send request to {}", provider_name))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        anyhow::bail!(
            "{} API Error ({}): {}",
            provider_name,
            status,
            error_text.chars().take(200).collect::<String>()
        );
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Malformed response body from {}", provider_name))
}

pub(crate) fn trim_base_url(base_url: Option<&str>, default: &str) -> String {
    base_url
        .unwrap_or(default)
        .trim_end_matches('/')
        .to_string()
}
