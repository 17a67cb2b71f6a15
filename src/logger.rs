//! Append-only event logging with failure recovery
//!
//! One line per processed event. When dispatch or the append itself fails,
//! the recovery collaborator is consulted exactly once and a final record is
//! still written, carrying the suggested remedy or the sentinel. Recovery's
//! own failures are caught here; a single event can never take down the
//! processing loop.

use crate::automation::Dispatcher;
use crate::error::Result;
use crate::event::Event;
use crate::recovery::{RemedySource, NO_SOLUTION};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Appends structured event records and drives the recovery path.
pub struct EventLogger {
    log_path: PathBuf,
    remedy: Box<dyn RemedySource>,
}

impl EventLogger {
    pub fn new(log_path: impl Into<PathBuf>, remedy: Box<dyn RemedySource>) -> Self {
        Self {
            log_path: log_path.into(),
            remedy,
        }
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append one record for a successfully processed event.
    ///
    /// An append fault is reported and surfaced, never retried.
    pub fn log_event(&self, event: &Event) -> Result<()> {
        self.append_record(event, None)
    }

    /// Run the full processing pipeline for one event.
    ///
    /// Success path: dispatch, then append one record. On any failure
    /// (dispatch or append), recovery is consulted exactly once and a final
    /// record is appended with the remedy or the sentinel. The original
    /// event is never retried.
    pub async fn process_event(&self, dispatcher: &Dispatcher, event: &Event) -> Result<()> {
        let failure = match dispatcher.dispatch(event) {
            Ok(()) => match self.log_event(event) {
                Ok(()) => return Ok(()),
                Err(e) => e,
            },
            Err(e) => e,
        };

        error!(system = %event.system_type, error = %failure, "Error processing event");

        let remedy = match self.remedy.suggest_remedy(&failure.to_string()).await {
            Ok(remedy) => {
                info!(remedy = %remedy, "Suggested solution");
                remedy
            }
            Err(e) => {
                // Recovery is best-effort; its failure degrades to the
                // sentinel instead of failing the cycle.
                error!(error = %e, "Error while trying alternative solutions");
                NO_SOLUTION.to_string()
            }
        };

        self.append_record(event, Some(&remedy)).map_err(|e| {
            error!(error = %e, "Failed to append failure record");
            e
        })
    }

    fn append_record(&self, event: &Event, remedy: Option<&str>) -> Result<()> {
        let mut snapshot = event.snapshot();
        if let Some(remedy) = remedy {
            snapshot["remedy"] = serde_json::Value::String(remedy.to_string());
        }

        let line = format!(
            "Event Type: {}, System: {}, Data: {}\n",
            event.event_type, event.system_type, snapshot
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                error!(path = %self.log_path.display(), error = %e, "Cannot open event log");
                e
            })?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
