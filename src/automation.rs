//! Automation handler dispatch
//!
//! Each enumerated language maps to a handler capable of `execute()`.
//! Resolution is an explicit registry lookup over the closed [`Language`]
//! set; a language with no registered handler is a configuration error,
//! never a silent fallback.

use crate::error::{AutodocError, Result};
use crate::event::{Event, Language};
use std::collections::HashMap;
use tracing::info;

/// A language-specific automation action.
///
/// Handlers are expected to be fast and side-effect-isolated (documentation
/// and automation actions only); they must not leave partial state behind
/// on failure.
pub trait AutomationHandler: Send + Sync {
    /// Handler name, used in log output.
    fn name(&self) -> &str;

    /// Run the automation action for one event.
    fn execute(&self, event: &Event) -> Result<()>;
}

impl std::fmt::Debug for dyn AutomationHandler + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutomationHandler")
            .field("name", &self.name())
            .finish()
    }
}

/// Doc automation for Python sources.
pub struct PythonAutomation;

impl AutomationHandler for PythonAutomation {
    fn name(&self) -> &str {
        "python-automation"
    }

    fn execute(&self, event: &Event) -> Result<()> {
        info!(event_type = %event.event_type, "Running Python doc automation");
        Ok(())
    }
}

/// Doc automation for Java sources.
pub struct JavaAutomation;

impl AutomationHandler for JavaAutomation {
    fn name(&self) -> &str {
        "java-automation"
    }

    fn execute(&self, event: &Event) -> Result<()> {
        info!(event_type = %event.event_type, "Running Java doc automation");
        Ok(())
    }
}

/// Doc automation for JavaScript sources.
pub struct JavaScriptAutomation;

impl AutomationHandler for JavaScriptAutomation {
    fn name(&self) -> &str {
        "javascript-automation"
    }

    fn execute(&self, event: &Event) -> Result<()> {
        info!(event_type = %event.event_type, "Running JavaScript doc automation");
        Ok(())
    }
}

/// Registry mapping each language to its automation handler.
pub struct Dispatcher {
    handlers: HashMap<Language, Box<dyn AutomationHandler>>,
}

impl Dispatcher {
    /// Registry with the built-in handler for every enumerated language.
    pub fn new() -> Self {
        let mut dispatcher = Self {
            handlers: HashMap::new(),
        };
        dispatcher.register(Language::Python, Box::new(PythonAutomation));
        dispatcher.register(Language::Java, Box::new(JavaAutomation));
        dispatcher.register(Language::JavaScript, Box::new(JavaScriptAutomation));
        dispatcher
    }

    /// Empty registry; callers register handlers explicitly.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register (or replace) the handler for a language.
    pub fn register(&mut self, language: Language, handler: Box<dyn AutomationHandler>) {
        self.handlers.insert(language, handler);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_handler(mut self, language: Language, handler: Box<dyn AutomationHandler>) -> Self {
        self.register(language, handler);
        self
    }

    /// Resolve the handler for a language.
    pub fn resolve(&self, language: Language) -> Result<&dyn AutomationHandler> {
        self.handlers
            .get(&language)
            .map(|h| h.as_ref())
            .ok_or_else(|| {
                AutodocError::Configuration(format!(
                    "no automation handler registered for language '{}'",
                    language
                ))
            })
    }

    /// Resolve and execute the handler for an event.
    pub fn dispatch(&self, event: &Event) -> Result<()> {
        let handler = self.resolve(event.language)?;
        info!(handler = handler.name(), language = %event.language, "Dispatching event");
        handler.execute(event)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
