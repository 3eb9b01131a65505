use thiserror::Error;

/// Failure inside a single skill. The agent records it and moves on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkillError {
    #[error("required field '{0}' is missing from the context")]
    MissingField(&'static str),

    #[error("generation failed: {0}")]
    Generation(String),

    #[error("memory store error: {0}")]
    Memory(String),
}

/// Fault that escapes an enrichment run and reaches the transport boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnrichError {
    #[error("{message}")]
    Internal { kind: String, message: String },
}

impl EnrichError {
    pub fn internal(kind: impl Into<String>, message: impl Into<String>) -> Self {
        EnrichError::Internal {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Machine-readable error kind, e.g. `"panic"`.
    pub fn kind(&self) -> &str {
        match self {
            EnrichError::Internal { kind, .. } => kind,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            EnrichError::Internal { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_error_display() {
        let e = SkillError::MissingField("url");
        assert_eq!(e.to_string(), "required field 'url' is missing from the context");
    }

    #[test]
    fn test_enrich_error_accessors() {
        let e = EnrichError::internal("panic", "skill blew up");
        assert_eq!(e.kind(), "panic");
        assert_eq!(e.message(), "skill blew up");
        assert_eq!(e.to_string(), "skill blew up");
    }
}
