//! Response and input validation
//!
//! A response is accepted only when it carries a non-empty `predictions`
//! sequence in which every element has a `generated_text` field. Validation
//! is side-effect-free and runs before anything enters the cache.

use crate::error::{AutodocError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One prediction record in a response payload.
///
/// Unknown sibling fields are preserved so the payload round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub generated_text: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Validated shape of a generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub predictions: Vec<Prediction>,
}

impl ResponsePayload {
    /// Generated texts in prediction order.
    pub fn texts(&self) -> Vec<&str> {
        self.predictions
            .iter()
            .map(|p| p.generated_text.as_str())
            .collect()
    }

    /// All generated texts joined into one response body.
    pub fn joined_text(&self) -> String {
        self.texts().join("\n")
    }
}

/// Validate a raw response payload against the prediction schema.
///
/// Fails with [`AutodocError::Schema`] when `predictions` is missing or
/// empty, or when any element lacks `generated_text`. The returned payload
/// preserves prediction order and any extra fields.
pub fn validate_response(payload: &Value) -> Result<ResponsePayload> {
    let parsed: ResponsePayload = serde_json::from_value(payload.clone())
        .map_err(|e| AutodocError::Schema(format!("invalid prediction format: {}", e)))?;

    if parsed.predictions.is_empty() {
        return Err(AutodocError::Schema(
            "no predictions found in the response".to_string(),
        ));
    }

    Ok(parsed)
}

/// Validate a caller-supplied query before it reaches a generator.
///
/// Fails with [`AutodocError::Input`] on empty or whitespace-only input.
pub fn validate_input(query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(AutodocError::Input("query cannot be empty".to_string()));
    }
    Ok(())
}
