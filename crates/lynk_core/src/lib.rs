pub mod config;
pub mod error;
pub mod normalizer;
pub mod types;

pub use config::LynkConfig;
pub use error::{EnrichError, SkillError};
pub use normalizer::normalize;
pub use types::{Action, AgentContext, AgentDecision, AgentInput, Capability};

/// Event marker for an explicit enrichment request.
pub const EVENT_RESOURCE_ENRICH: &str = "RESOURCE_ENRICH";

/// Event marker emitted when a user saves a new link.
pub const EVENT_LINK_SAVED: &str = "LINK_SAVED";
