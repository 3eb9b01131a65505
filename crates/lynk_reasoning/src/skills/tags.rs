use super::{generate, require_url, Skill};
use crate::llm::LlmClient;
use crate::prompts;
use async_trait::async_trait;
use lynk_core::{AgentContext, Capability, SkillError};
use lynk_memory::MemoryService;
use std::sync::Arc;

/// Split a comma-separated provider answer into trimmed, non-empty tokens.
pub fn split_tags(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

pub struct TagSkill {
    llm: Arc<dyn LlmClient>,
    memory: Option<Arc<MemoryService>>,
}

impl TagSkill {
    pub fn new(llm: Arc<dyn LlmClient>, memory: Option<Arc<MemoryService>>) -> Self {
        Self { llm, memory }
    }

    async fn canonical(&self, tag: String) -> Result<String, SkillError> {
        match &self.memory {
            Some(memory) => memory
                .reuse_or_create(&tag)
                .await
                .map_err(|e| SkillError::Memory(format!("{:#}", e))),
            None => Ok(tag),
        }
    }
}

#[async_trait]
impl Skill for TagSkill {
    fn name(&self) -> &str {
        "TagSkill"
    }

    fn capability(&self) -> Capability {
        Capability::Tags
    }

    async fn apply(&self, context: &mut AgentContext) -> Result<(), SkillError> {
        context.add_reasoning("TagSkill started");
        let url = require_url(context)?;
        let prompt = prompts::tags(&url, context.persona_or_default());

        let response = generate(self.llm.as_ref(), &prompt).await?;

        // First-seen order, one slot per canonical value.
        let mut final_tags: Vec<String> = Vec::new();
        for candidate in split_tags(&response) {
            let tag = self.canonical(candidate).await?;
            if !tag.is_empty() && !final_tags.contains(&tag) {
                final_tags.push(tag);
            }
        }

        context.remember(Capability::Tags.as_str(), final_tags);
        context.add_reasoning(if self.memory.is_some() {
            "TagSkill inferred and reused tags"
        } else {
            "TagSkill inferred tags (memory not configured)"
        });
        Ok(())
    }
}
