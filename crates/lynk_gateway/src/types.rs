use lynk_core::EnrichError;
use serde::{Deserialize, Serialize};

/// Body of a failed enrichment response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `"Failed to enrich resource"`.
    pub error: String,
    pub message: String,
    /// Fault kind, e.g. `"panic"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&EnrichError> for ErrorBody {
    fn from(err: &EnrichError) -> Self {
        Self {
            error: "Failed to enrich resource".to_string(),
            message: err.message().to_string(),
            kind: err.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_from_enrich_error() {
        let body = ErrorBody::from(&EnrichError::internal("panic", "boom"));
        assert_eq!(body.error, "Failed to enrich resource");
        assert_eq!(body.message, "boom");
        assert_eq!(body.kind, "panic");
    }

    #[test]
    fn test_error_body_wire_shape() {
        let body = ErrorBody::from(&EnrichError::internal("panic", "boom"));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "Failed to enrich resource", "message": "boom", "type": "panic"})
        );
    }
}
