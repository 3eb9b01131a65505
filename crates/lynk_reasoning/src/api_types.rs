//! Request and response bodies of the supported generation APIs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// OpenAI-compatible chat completions (Groq)
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub content: Option<String>,
}

impl ChatResponse {
    pub fn into_text(self) -> Result<String> {
        let text = self
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .context("Response has no choices[0].message.content")?;
        non_blank(text)
    }
}

// ============================================================================
// Gemini generateContent
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<GeminiContent<'a>>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent<'a> {
    pub parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
pub struct GeminiPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    pub fn into_text(self) -> Result<String> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .context("Response has no candidates[0].content.parts[0].text")?;
        non_blank(text)
    }
}

// ============================================================================
// HuggingFace text-generation inference
// ============================================================================

#[derive(Debug, Serialize)]
pub struct InferenceRequest<'a> {
    pub inputs: &'a str,
    pub parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
pub struct InferenceParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub return_full_text: bool,
}

#[derive(Debug, Deserialize)]
pub struct InferenceOutput {
    pub generated_text: Option<String>,
}

pub fn inference_text(outputs: Vec<InferenceOutput>) -> Result<String> {
    let text = outputs
        .into_iter()
        .next()
        .and_then(|o| o.generated_text)
        .context("Response has no [0].generated_text")?;
    non_blank(text)
}

fn non_blank(text: String) -> Result<String> {
    if text.trim().is_empty() {
        anyhow::bail!("Response text is empty");
    }
    Ok(text)
}
