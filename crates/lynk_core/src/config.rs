use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LynkConfig {
    pub llm: LlmConfig,
    pub memory: MemoryConfig,
    pub gateway: GatewayConfig,
}

impl LynkConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: LynkConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("LYNK_OFFLINE") {
            self.llm.offline = matches!(v.trim(), "1" | "true" | "yes");
        }
        if let Ok(v) = std::env::var("LLM_MAX_TOKENS") {
            if let Ok(n) = v.parse() {
                self.llm.max_tokens = n;
            }
        }
        if let Ok(v) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(n) = v.parse() {
                self.llm.temperature = n;
            }
        }
        if let Ok(v) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                self.llm.timeout_secs = n;
            }
        }
        if let Ok(v) = std::env::var("LYNK_DB_PATH") {
            if !v.is_empty() {
                self.memory.db_path = Some(v);
            }
        }
        if let Ok(v) = std::env::var("LYNK_HOST") {
            self.gateway.host = v;
        }
        if let Ok(v) = std::env::var("LYNK_PORT") {
            if let Ok(n) = v.parse() {
                self.gateway.port = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Skip network providers entirely and answer from the offline provider.
    pub offline: bool,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on a single provider call. Exceeding it counts as a failure.
    pub timeout_secs: u64,
    /// Fallback chain, highest priority first.
    pub providers: Vec<ProviderConfig>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            offline: false,
            max_tokens: 500,
            temperature: 0.7,
            timeout_secs: 30,
            providers: default_providers(),
        }
    }
}

fn default_providers() -> Vec<ProviderConfig> {
    vec![
        ProviderConfig {
            kind: ProviderKind::Groq,
            model: "llama-3.3-70b-versatile".to_string(),
            base_url: None,
            api_key_env: Some("GROQ_API_KEY".to_string()),
        },
        ProviderConfig {
            kind: ProviderKind::Gemini,
            model: "gemini-1.5-flash".to_string(),
            base_url: None,
            api_key_env: Some("GEMINI_API_KEY".to_string()),
        },
        ProviderConfig {
            kind: ProviderKind::HuggingFace,
            model: "mistralai/Mistral-7B-Instruct-v0.3".to_string(),
            base_url: None,
            api_key_env: Some("HF_API_KEY".to_string()),
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
    /// Name of the env var holding the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ProviderConfig {
    /// Resolve the API key from the environment. Empty values count as unset.
    pub fn api_key(&self) -> Option<String> {
        self.api_key_env
            .as_deref()
            .and_then(|name| std::env::var(name).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Groq,
    Gemini,
    #[serde(rename = "huggingface", alias = "hugging_face", alias = "hf")]
    HuggingFace,
    Offline,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// When false, skills store raw provider output without canonicalization.
    pub enabled: bool,
    /// SQLite database path. `None` keeps canonical entries in process memory.
    pub db_path: Option<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            db_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
