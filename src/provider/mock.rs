//! Mock generator for testing
//!
//! Returns configurable predictions payloads without network calls and
//! records every prompt for assertions.

use super::Generator;
use crate::error::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// Generator that returns predefined payloads (FIFO), falling back to a
/// default payload when the queue is empty.
pub struct MockGenerator {
    payloads: Arc<Mutex<Vec<Value>>>,
    default_payload: Value,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self {
            payloads: Arc::new(Mutex::new(vec![])),
            default_payload: json!({"predictions": [{"generated_text": "Mock response"}]}),
            prompts: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Create with a queue of payloads.
    pub fn with_payloads(payloads: Vec<Value>) -> Self {
        Self {
            payloads: Arc::new(Mutex::new(payloads)),
            ..Self::new()
        }
    }

    /// Set the payload returned when the queue is empty.
    pub fn with_default(mut self, payload: Value) -> Self {
        self.default_payload = payload;
        self
    }

    /// Add a payload to the queue.
    pub fn queue_payload(&self, payload: Value) {
        self.payloads.lock().unwrap().push(payload);
    }

    /// All prompts seen so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// Number of generation calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<Value> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let payload = {
            let mut queue = self.payloads.lock().unwrap();
            if queue.is_empty() {
                self.default_payload.clone()
            } else {
                queue.remove(0)
            }
        };

        Ok(payload)
    }
}
