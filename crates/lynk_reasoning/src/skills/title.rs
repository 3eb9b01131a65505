use super::{generate, require_url, Skill};
use crate::llm::LlmClient;
use crate::prompts;
use async_trait::async_trait;
use lynk_core::{AgentContext, Capability, SkillError};
use std::sync::Arc;

pub struct TitleSkill {
    llm: Arc<dyn LlmClient>,
}

impl TitleSkill {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Skill for TitleSkill {
    fn name(&self) -> &str {
        "TitleSkill"
    }

    fn capability(&self) -> Capability {
        Capability::Title
    }

    async fn apply(&self, context: &mut AgentContext) -> Result<(), SkillError> {
        context.add_reasoning("TitleSkill started");
        let url = require_url(context)?;
        let prompt = prompts::title(&url, context.persona_or_default());

        let title = generate(self.llm.as_ref(), &prompt).await?;
        context.remember(Capability::Title.as_str(), title.trim());

        context.add_reasoning("TitleSkill generated title");
        Ok(())
    }
}
