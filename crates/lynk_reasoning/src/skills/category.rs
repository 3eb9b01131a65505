use super::{generate, require_url, Skill};
use crate::llm::LlmClient;
use crate::prompts;
use async_trait::async_trait;
use lynk_core::{AgentContext, Capability, SkillError};
use lynk_memory::MemoryService;
use std::sync::Arc;

// Category doubles as the folder a resource is filed under.
pub struct CategorySkill {
    llm: Arc<dyn LlmClient>,
    memory: Option<Arc<MemoryService>>,
}

impl CategorySkill {
    pub fn new(llm: Arc<dyn LlmClient>, memory: Option<Arc<MemoryService>>) -> Self {
        Self { llm, memory }
    }
}

#[async_trait]
impl Skill for CategorySkill {
    fn name(&self) -> &str {
        "CategorySkill"
    }

    fn capability(&self) -> Capability {
        Capability::Category
    }

    async fn apply(&self, context: &mut AgentContext) -> Result<(), SkillError> {
        context.add_reasoning("CategorySkill started");
        let url = require_url(context)?;
        let prompt = prompts::category(&url, context.persona_or_default());

        let raw_category = generate(self.llm.as_ref(), &prompt).await?;
        let raw_category = raw_category.trim();

        let final_category = match &self.memory {
            Some(memory) => {
                let canonical = memory
                    .reuse_or_create_category(raw_category)
                    .await
                    .map_err(|e| SkillError::Memory(format!("{:#}", e)))?;
                if canonical.is_empty() {
                    raw_category.to_string()
                } else {
                    canonical
                }
            }
            None => raw_category.to_string(),
        };

        context.add_reasoning(format!("CategorySkill reused category: {}", final_category));
        context.remember(Capability::Category.as_str(), final_category);
        Ok(())
    }
}
