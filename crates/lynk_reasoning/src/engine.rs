use crate::agent::ResourceAgent;
use crate::decision::DecisionEngine;
use crate::llm::LlmClient;
use crate::skills::default_skills;
use futures_util::FutureExt;
use lynk_core::{AgentContext, AgentDecision, AgentInput, EnrichError};
use lynk_memory::MemoryService;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// The "enrich resource" operation: decide, build the context, run the
/// agent, stamp the decision confidence.
pub struct EnrichmentEngine {
    decision: DecisionEngine,
    agent: ResourceAgent,
}

impl EnrichmentEngine {
    pub fn new(decision: DecisionEngine, agent: ResourceAgent) -> Self {
        Self { decision, agent }
    }

    /// Default rules and the four built-in skills.
    pub fn with_defaults(llm: Arc<dyn LlmClient>, memory: Option<Arc<MemoryService>>) -> Self {
        Self::new(
            DecisionEngine::with_defaults(),
            ResourceAgent::new(default_skills(llm, memory)),
        )
    }

    pub fn decide(&self, input: &AgentInput) -> AgentDecision {
        self.decision.decide(input)
    }

    /// Enrich one resource.
    ///
    /// Returns an empty context when the decision is `NONE`. The only error
    /// is an unexpected fault (a panic) inside the agent run. The run is not
    /// spawned, so dropping this future cancels it.
    pub async fn enrich(&self, input: &AgentInput) -> Result<AgentContext, EnrichError> {
        let decision = self.decide(input);
        tracing::info!(
            "Enrichment request url={:?} event={:?} → {} ({})",
            input.url,
            input.event,
            decision.action,
            decision.reason
        );

        if !decision.should_enrich() {
            return Ok(AgentContext::empty(input));
        }

        let mut context = AgentContext::from_input(input);
        context.add_reasoning(format!("DecisionEngine selected action: {}", decision.action));
        context.add_reasoning(format!("Reason: {}", decision.reason));

        let run = AssertUnwindSafe(self.agent.execute(&mut context))
            .catch_unwind()
            .await;
        if let Err(panic) = run {
            let message = panic_message(panic.as_ref());
            tracing::error!("Enrichment run aborted: {}", message);
            return Err(EnrichError::internal("panic", message));
        }

        context.remember("confidence", decision.confidence);
        tracing::info!("Enriched resource url={:?}", input.url);
        Ok(context)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown internal fault".to_string()
    }
}
