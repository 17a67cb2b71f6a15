//! Autodoc - event automation and resilient response caching

pub mod api;
pub mod automation;
pub mod cache;
pub mod config;
pub mod datastore;
pub mod error;
pub mod event;
pub mod logger;
pub mod poller;
pub mod provider;
pub mod recovery;
pub mod selector;
pub mod signal;
pub mod validator;

pub use api::EventApi;
pub use automation::{AutomationHandler, Dispatcher};
pub use cache::{CacheKey, ResponseCache};
pub use config::Config;
pub use error::{AutodocError, Result};
pub use event::{Event, EventType, Language, SystemType};
pub use logger::EventLogger;
pub use poller::Poller;
pub use provider::{create_generator, GeminiGenerator, Generator, MockGenerator};
pub use recovery::{HttpRemedySource, RemedySource, NO_SOLUTION};
pub use signal::SignalChannel;
pub use validator::{validate_input, validate_response, Prediction, ResponsePayload};
