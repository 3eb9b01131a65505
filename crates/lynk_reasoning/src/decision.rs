use lynk_core::{Action, AgentDecision, AgentInput, EVENT_LINK_SAVED, EVENT_RESOURCE_ENRICH};

const REASON_RESOURCE: &str = "Resource needs enrichment with AI-generated metadata";

// ============================================================================
// DecisionRule trait
// ============================================================================

pub trait DecisionRule: Send + Sync {
    /// Evaluate input and return a decision, or None to pass to next rule.
    fn evaluate(&self, input: &AgentInput) -> Option<AgentDecision>;

    /// Name for logging.
    fn name(&self) -> &str;
}

// ============================================================================
// DecisionEngine
// ============================================================================

/// Decides whether a request should be enriched at all.
///
/// Pure and total: rules run in order, the first match wins, and an input
/// no rule claims is treated as an unhandled event.
pub struct DecisionEngine {
    rules: Vec<Box<dyn DecisionRule>>,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DecisionEngine {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine with the built-in rules.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(ResourcePresentRule));
        engine.add_rule(Box::new(MissingEventRule));
        engine.add_rule(Box::new(EventRule::resource_enrich()));
        engine.add_rule(Box::new(EventRule::link_saved()));
        engine.add_rule(Box::new(UnhandledEventRule));
        engine
    }

    pub fn add_rule(&mut self, rule: Box<dyn DecisionRule>) {
        self.rules.push(rule);
    }

    pub fn decide(&self, input: &AgentInput) -> AgentDecision {
        for rule in &self.rules {
            if let Some(decision) = rule.evaluate(input) {
                tracing::debug!(
                    "DecisionEngine: rule '{}' matched → {} ({:.2})",
                    rule.name(),
                    decision.action,
                    decision.confidence
                );
                return decision;
            }
        }
        unhandled()
    }
}

fn unhandled() -> AgentDecision {
    AgentDecision::new(Action::None, 0.05, "Unhandled event")
}

// ============================================================================
// Built-in rules
// ============================================================================

/// Identifying fields present: enrich regardless of the event.
pub struct ResourcePresentRule;

impl DecisionRule for ResourcePresentRule {
    fn evaluate(&self, input: &AgentInput) -> Option<AgentDecision> {
        if input.resource_id.is_some() && input.url.is_some() {
            Some(AgentDecision::new(Action::Enrich, 0.75, REASON_RESOURCE))
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        "resource_present"
    }
}

pub struct MissingEventRule;

impl DecisionRule for MissingEventRule {
    fn evaluate(&self, input: &AgentInput) -> Option<AgentDecision> {
        if input.event.is_none() {
            Some(AgentDecision::new(
                Action::None,
                0.1,
                "Missing event type and resource information",
            ))
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        "missing_event"
    }
}

/// Matches one event marker exactly.
pub struct EventRule {
    event: &'static str,
    confidence: f64,
    reason: &'static str,
}

impl EventRule {
    pub fn resource_enrich() -> Self {
        Self {
            event: EVENT_RESOURCE_ENRICH,
            confidence: 0.75,
            reason: REASON_RESOURCE,
        }
    }

    pub fn link_saved() -> Self {
        Self {
            event: EVENT_LINK_SAVED,
            confidence: 0.65,
            reason: "New link detected, enriching with metadata",
        }
    }
}

impl DecisionRule for EventRule {
    fn evaluate(&self, input: &AgentInput) -> Option<AgentDecision> {
        if input.event.as_deref() == Some(self.event) {
            Some(AgentDecision::new(Action::Enrich, self.confidence, self.reason))
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        self.event
    }
}

pub struct UnhandledEventRule;

impl DecisionRule for UnhandledEventRule {
    fn evaluate(&self, _input: &AgentInput) -> Option<AgentDecision> {
        Some(unhandled())
    }

    fn name(&self) -> &str {
        "unhandled_event"
    }
}

// ============================================================================
// Tests
// ============================================================================
