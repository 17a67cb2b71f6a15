//! Event vocabulary
//!
//! Closed sum types for the trigger boundary. Any value outside the
//! enumerated sets is rejected when parsed, before dispatch is attempted.

use crate::error::AutodocError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content change that triggered the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Modification,
    Creation,
    Deletion,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Modification => write!(f, "modification"),
            EventType::Creation => write!(f, "creation"),
            EventType::Deletion => write!(f, "deletion"),
        }
    }
}

impl FromStr for EventType {
    type Err = AutodocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modification" => Ok(EventType::Modification),
            "creation" => Ok(EventType::Creation),
            "deletion" => Ok(EventType::Deletion),
            other => Err(AutodocError::Configuration(format!(
                "unknown event type '{}' (expected modification, creation, deletion)",
                other
            ))),
        }
    }
}

/// Automation system an event is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SystemType {
    AutoDocGenerator,
    LoggingSystem,
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemType::AutoDocGenerator => write!(f, "AutoDocGenerator"),
            SystemType::LoggingSystem => write!(f, "LoggingSystem"),
        }
    }
}

impl FromStr for SystemType {
    type Err = AutodocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AutoDocGenerator" => Ok(SystemType::AutoDocGenerator),
            "LoggingSystem" => Ok(SystemType::LoggingSystem),
            other => Err(AutodocError::Configuration(format!(
                "unknown system type '{}' (expected AutoDocGenerator, LoggingSystem)",
                other
            ))),
        }
    }
}

/// Language tag selecting the automation handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
    Java,
    JavaScript,
}

impl Language {
    /// All enumerated languages, in registry order.
    pub const ALL: [Language; 3] = [Language::Python, Language::Java, Language::JavaScript];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Python => write!(f, "Python"),
            Language::Java => write!(f, "Java"),
            Language::JavaScript => write!(f, "JavaScript"),
        }
    }
}

impl FromStr for Language {
    type Err = AutodocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Python" => Ok(Language::Python),
            "Java" => Ok(Language::Java),
            "JavaScript" => Ok(Language::JavaScript),
            other => Err(AutodocError::Configuration(format!(
                "unknown language '{}' (expected Python, Java, JavaScript)",
                other
            ))),
        }
    }
}

/// A validated change event, consumed immediately by the dispatcher and
/// logger; not persisted beyond the log line it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub event_type: EventType,
    pub system_type: SystemType,
    pub language: Language,
}

impl Event {
    pub fn new(event_type: EventType, system_type: SystemType, language: Language) -> Self {
        Self {
            event_type,
            system_type,
            language,
        }
    }

    /// JSON snapshot of the event's dynamic data, as written to the log.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "event_type": self.event_type.to_string(),
            "system_type": self.system_type.to_string(),
            "language": self.language.to_string(),
        })
    }
}
