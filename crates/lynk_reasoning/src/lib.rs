pub mod agent;
pub mod api_types;
pub mod decision;
pub mod engine;
pub mod fallback;
pub mod llm;
pub mod prompts;
pub mod providers;
pub mod skills;

pub use agent::ResourceAgent;
pub use decision::{DecisionEngine, DecisionRule};
pub use engine::EnrichmentEngine;
pub use fallback::{FallbackChain, GENERATION_FAILED};
pub use llm::{CompletionParams, LlmClient};
pub use skills::Skill;
