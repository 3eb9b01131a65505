//! Enrichment skills.
//!
//! Each skill produces one field of the context memory from a single
//! generation call. Skills borrow the context only for the duration of
//! `apply`.

mod category;
mod description;
mod tags;
mod title;

pub use category::CategorySkill;
pub use description::DescriptionSkill;
pub use tags::{split_tags, TagSkill};
pub use title::TitleSkill;

use crate::llm::LlmClient;
use async_trait::async_trait;
use lynk_core::{AgentContext, Capability, SkillError};
use lynk_memory::MemoryService;
use std::sync::Arc;

#[async_trait]
pub trait Skill: Send + Sync {
    /// Display name used in reasoning lines, e.g. `"TagSkill"`.
    fn name(&self) -> &str;

    /// The field this skill produces. Drives both ordering and `needs` gating.
    fn capability(&self) -> Capability;

    async fn apply(&self, context: &mut AgentContext) -> Result<(), SkillError>;
}

/// The four built-in skills. `memory` is optional; without it tags and
/// categories are stored as the provider returned them.
pub fn default_skills(
    llm: Arc<dyn LlmClient>,
    memory: Option<Arc<MemoryService>>,
) -> Vec<Box<dyn Skill>> {
    vec![
        Box::new(TitleSkill::new(llm.clone())),
        Box::new(DescriptionSkill::new(llm.clone())),
        Box::new(TagSkill::new(llm.clone(), memory.clone())),
        Box::new(CategorySkill::new(llm, memory)),
    ]
}

fn require_url(context: &AgentContext) -> Result<String, SkillError> {
    context
        .url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .ok_or(SkillError::MissingField("url"))
}

async fn generate(llm: &dyn LlmClient, prompt: &str) -> Result<String, SkillError> {
    llm.generate(prompt)
        .await
        .map_err(|e| SkillError::Generation(format!("{:#}", e)))
}
