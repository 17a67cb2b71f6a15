//! Trigger boundary for automation events
//!
//! Validates the event vocabulary before anything is dispatched: an
//! out-of-set value is rejected here, so a bad trigger never reaches a
//! handler. Accepted events flow through the dispatcher/logger pipeline.

use crate::automation::Dispatcher;
use crate::error::Result;
use crate::event::Event;
use crate::logger::EventLogger;

/// Entry point used by external callers and the poller.
pub struct EventApi {
    dispatcher: Dispatcher,
    logger: EventLogger,
}

impl EventApi {
    pub fn new(dispatcher: Dispatcher, logger: EventLogger) -> Self {
        Self { dispatcher, logger }
    }

    /// Trigger an event from raw vocabulary strings.
    ///
    /// All three values are parsed before dispatch is attempted; any value
    /// outside the enumerated sets fails with a configuration error and no
    /// handler runs.
    pub async fn trigger_event(
        &self,
        event_type: &str,
        system_type: &str,
        language: &str,
    ) -> Result<()> {
        let event = Event::new(event_type.parse()?, system_type.parse()?, language.parse()?);
        self.process(&event).await
    }

    /// Run an already-validated event through dispatch and logging.
    pub async fn process(&self, event: &Event) -> Result<()> {
        self.logger.process_event(&self.dispatcher, event).await
    }
}
