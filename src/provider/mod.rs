//! Generator abstraction
//!
//! The generation backend is an opaque capability: hand it a prompt, get a
//! predictions payload back. The trait is the seam between the caching
//! pipeline and the network; implementations must not touch the cache.
//!
//! | Generator | Use case | Requires |
//! |-----------|----------|----------|
//! | `gemini`  | Production | API key |
//! | `mock`    | Testing    | Nothing |

mod gemini;
mod mock;

pub use gemini::GeminiGenerator;
pub use mock::MockGenerator;

use crate::config::Config;
use crate::error::{AutodocError, Result};
use async_trait::async_trait;
use serde_json::Value;

/// An opaque text generation capability.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generator name (e.g. "gemini", "mock").
    fn name(&self) -> &str;

    /// Produce a raw predictions payload for a prompt.
    ///
    /// The payload is validated by the caller before it is cached or
    /// returned; generators only move bytes.
    async fn generate(&self, prompt: &str) -> Result<Value>;
}

impl std::fmt::Debug for dyn Generator + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.name())
            .finish()
    }
}

/// Create a generator by name.
pub fn create_generator(name: &str, config: &Config) -> Result<Box<dyn Generator>> {
    match name.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiGenerator::new(
            config.gemini_api_key.clone(),
            config.request_timeout(),
        ))),
        "mock" => Ok(Box::new(MockGenerator::new())),
        other => Err(AutodocError::Configuration(format!(
            "unknown generator: '{}'. Available: gemini, mock",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_generator_mock() {
        let generator = create_generator("mock", &Config::default()).unwrap();
        assert_eq!(generator.name(), "mock");
    }

    #[test]
    fn test_create_generator_gemini() {
        let generator = create_generator("gemini", &Config::default()).unwrap();
        assert_eq!(generator.name(), "gemini");
    }

    #[test]
    fn test_create_generator_name_is_case_insensitive() {
        assert!(create_generator("Mock", &Config::default()).is_ok());
    }

    #[test]
    fn test_create_generator_unknown() {
        let err = create_generator("davinci", &Config::default()).unwrap_err();
        assert!(matches!(err, AutodocError::Configuration(_)));
    }
}
