use crate::skills::Skill;
use lynk_core::AgentContext;

// ============================================================================
// ResourceAgent
// ============================================================================

/// Runs enrichment skills against one context, sequentially, in capability
/// priority order (title, description, tags, category).
///
/// With no declared needs every skill runs. Otherwise a skill runs only when
/// `needs[capability]` is true, and each run/skip decision is written to the
/// reasoning log before the skill executes.
pub struct ResourceAgent {
    skills: Vec<Box<dyn Skill>>,
}

impl ResourceAgent {
    pub fn new(mut skills: Vec<Box<dyn Skill>>) -> Self {
        skills.sort_by_key(|s| s.capability());
        Self { skills }
    }

    pub fn skill_names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name()).collect()
    }

    /// A failing skill is recorded in the reasoning log; the remaining skills
    /// still run.
    pub async fn execute(&self, context: &mut AgentContext) {
        if !context.has_needs() {
            for skill in &self.skills {
                run_skill(skill.as_ref(), context).await;
            }
            return;
        }

        for skill in &self.skills {
            if context.needs(skill.capability()) {
                context.add_reasoning(format!("Executing {} (requested by needs)", skill.name()));
                run_skill(skill.as_ref(), context).await;
            } else {
                context.add_reasoning(format!("Skipping {} (not needed)", skill.name()));
            }
        }
    }
}

async fn run_skill(skill: &dyn Skill, context: &mut AgentContext) {
    if let Err(e) = skill.apply(context).await {
        tracing::warn!("{} failed: {}", skill.name(), e);
        context.add_reasoning(format!("{} failed: {}", skill.name(), e));
    }
}
