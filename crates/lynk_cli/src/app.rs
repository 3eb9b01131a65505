use anyhow::{Context, Result};
use lynk_core::config::MemoryConfig;
use lynk_core::{AgentInput, Capability, LynkConfig};
use lynk_memory::{InMemoryRepository, MemoryRepository, MemoryService, SqliteRepository};
use lynk_reasoning::providers::build_chain;
use lynk_reasoning::EnrichmentEngine;
use std::collections::HashMap;
use std::sync::Arc;

/// Everything a command needs, wired from one config.
pub struct App {
    pub engine: Arc<EnrichmentEngine>,
    pub memory: Option<Arc<MemoryService>>,
}

impl App {
    pub async fn build(config: &LynkConfig) -> Result<Self> {
        let memory = build_memory(&config.memory).await?;
        let chain = build_chain(&config.llm).context("Failed to build LLM provider chain")?;
        let engine = EnrichmentEngine::with_defaults(Arc::new(chain), memory.clone());
        Ok(Self {
            engine: Arc::new(engine),
            memory,
        })
    }
}

/// `None` when canonicalization is disabled. Without a database path the
/// canonical entries live only as long as the process.
pub async fn build_memory(config: &MemoryConfig) -> Result<Option<Arc<MemoryService>>> {
    if !config.enabled {
        tracing::info!("Memory disabled, tags and categories are stored as generated");
        return Ok(None);
    }

    let repo: Arc<dyn MemoryRepository> = match &config.db_path {
        Some(path) => {
            tracing::info!("Connecting to memory at {}...", path);
            Arc::new(SqliteRepository::new(path).await?)
        }
        None => {
            tracing::info!("No memory database configured, using in-process store");
            Arc::new(InMemoryRepository::new())
        }
    };
    Ok(Some(Arc::new(MemoryService::new(repo))))
}

/// Build the `needs` map from `--need` flags. An empty list means "everything".
pub fn parse_needs(needs: &[String]) -> Result<Option<HashMap<String, bool>>> {
    if needs.is_empty() {
        return Ok(None);
    }

    let mut map = HashMap::new();
    for need in needs {
        let capability = Capability::parse(need).with_context(|| {
            format!(
                "Unknown capability '{}' (expected one of: title, description, tags, category)",
                need
            )
        })?;
        map.insert(capability.as_str().to_string(), true);
    }
    Ok(Some(map))
}

pub fn enrich_input(
    url: String,
    resource_id: Option<String>,
    event: String,
    persona: Option<String>,
    needs: Option<HashMap<String, bool>>,
) -> AgentInput {
    AgentInput {
        resource_id,
        url: Some(url),
        persona,
        event: Some(event),
        needs,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lynk_memory::EntryType;

    #[test]
    fn test_parse_needs() {
        assert_eq!(parse_needs(&[]).unwrap(), None);

        let needs = parse_needs(&["Tags".to_string(), " category ".to_string()]).unwrap().unwrap();
        assert_eq!(needs.len(), 2);
        assert_eq!(needs.get("tags"), Some(&true));
        assert_eq!(needs.get("category"), Some(&true));

        assert!(parse_needs(&["summary".to_string()]).is_err());
    }

    #[tokio::test]
    async fn test_build_memory_disabled() {
        let config = MemoryConfig {
            enabled: false,
            db_path: None,
        };
        assert!(build_memory(&config).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_build_memory_with_sqlite_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lynk.db");
        let config = MemoryConfig {
            enabled: true,
            db_path: Some(path.display().to_string()),
        };

        let memory = build_memory(&config).await.unwrap().unwrap();
        assert_eq!(memory.reuse_or_create("Rust Lang").await.unwrap(), "rust-lang");
        assert_eq!(memory.count(EntryType::Tag).await.unwrap(), 1);
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_app_enriches_offline() {
        let mut config = LynkConfig::default();
        config.llm.offline = true;
        let app = App::build(&config).await.unwrap();

        let input = enrich_input(
            "https://medium.com/@someone/post".into(),
            None,
            "LINK_SAVED".into(),
            None,
            None,
        );
        let context = app.engine.enrich(&input).await.unwrap();

        assert_eq!(context.memory["title"], "Medium - Articles and Ideas");
        assert_eq!(context.memory["category"], "reading");
        assert_eq!(context.memory["confidence"], 0.65);
    }
}
