use super::{generate, require_url, Skill};
use crate::llm::LlmClient;
use crate::prompts;
use async_trait::async_trait;
use lynk_core::{AgentContext, Capability, SkillError};
use std::sync::Arc;

pub struct DescriptionSkill {
    llm: Arc<dyn LlmClient>,
}

impl DescriptionSkill {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Skill for DescriptionSkill {
    fn name(&self) -> &str {
        "DescriptionSkill"
    }

    fn capability(&self) -> Capability {
        Capability::Description
    }

    async fn apply(&self, context: &mut AgentContext) -> Result<(), SkillError> {
        context.add_reasoning("DescriptionSkill started");
        let url = require_url(context)?;
        let prompt = prompts::description(&url, context.persona_or_default());

        let description = generate(self.llm.as_ref(), &prompt).await?;
        context.remember(Capability::Description.as_str(), description.trim());

        context.add_reasoning("DescriptionSkill generated description");
        Ok(())
    }
}
