use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

// ============================================================================
// Inbound request
// ============================================================================

/// Raw enrichment request as received from the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentInput {
    pub resource_id: Option<String>,
    pub url: Option<String>,
    /// Free-text audience/voice hint passed into prompts.
    pub persona: Option<String>,
    pub event: Option<String>,
    pub user_id: Option<String>,
    pub content_type: Option<String>,
    pub existing_title: Option<String>,
    pub existing_description: Option<String>,
    /// Capability name → whether the caller wants it generated.
    pub needs: Option<HashMap<String, bool>>,
}

// ============================================================================
// Capability
// ============================================================================

/// Enrichment field a skill produces.
///
/// Variant order is the fixed execution priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Title,
    Description,
    Tags,
    Category,
}

impl Capability {
    pub const ALL: [Capability; 4] = [
        Capability::Title,
        Capability::Description,
        Capability::Tags,
        Capability::Category,
    ];

    /// Key used both in `needs` and in the context memory.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Title => "title",
            Capability::Description => "description",
            Capability::Tags => "tags",
            Capability::Category => "category",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Decision
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Enrich,
    None,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Enrich => "ENRICH",
            Action::None => "NONE",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating the decision rules for one request.
///
/// `confidence` is advisory and never drives control flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDecision {
    pub action: Action,
    pub confidence: f64,
    pub reason: String,
}

impl AgentDecision {
    pub fn new(action: Action, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            action,
            confidence: confidence.clamp(0.0, 1.0),
            reason: reason.into(),
        }
    }

    pub fn should_enrich(&self) -> bool {
        self.action == Action::Enrich
    }
}

// ============================================================================
// Working context
// ============================================================================

/// Mutable state of a single enrichment run.
///
/// Owned by the caller for the duration of the run and lent to each skill in
/// turn. `reasoning` is append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentContext {
    pub resource_id: Option<String>,
    pub url: Option<String>,
    pub persona: Option<String>,
    pub needs: Option<HashMap<String, bool>>,
    pub memory: BTreeMap<String, Value>,
    pub reasoning: Vec<String>,
}

impl AgentContext {
    pub fn from_input(input: &AgentInput) -> Self {
        Self {
            resource_id: input.resource_id.clone(),
            url: input.url.clone(),
            persona: input.persona.clone(),
            needs: input.needs.clone(),
            memory: BTreeMap::new(),
            reasoning: Vec::new(),
        }
    }

    /// Context returned when no enrichment is performed: identity fields
    /// only, nothing in memory or reasoning.
    pub fn empty(input: &AgentInput) -> Self {
        Self::from_input(input)
    }

    pub fn add_reasoning(&mut self, step: impl Into<String>) {
        self.reasoning.push(step.into());
    }

    pub fn remember(&mut self, key: &str, value: impl Into<Value>) {
        self.memory.insert(key.to_string(), value.into());
    }

    pub fn recall(&self, key: &str) -> Option<&Value> {
        self.memory.get(key)
    }

    /// True when the caller declared at least one need.
    pub fn has_needs(&self) -> bool {
        self.needs.as_ref().is_some_and(|n| !n.is_empty())
    }

    /// Whether `capability` was requested. Missing keys count as `false`.
    pub fn needs(&self, capability: Capability) -> bool {
        self.needs
            .as_ref()
            .and_then(|n| n.get(capability.as_str()).copied())
            .unwrap_or(false)
    }

    /// Persona as rendered into prompts.
    pub fn persona_or_default(&self) -> &str {
        self.persona
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("none")
    }
}
