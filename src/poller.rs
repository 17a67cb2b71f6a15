//! Background polling loop
//!
//! A recurring task that reads the signal channel each cycle, assembles an
//! event from the signal token plus default metadata, and drives the
//! dispatcher/logger pipeline. Shutdown is cooperative: a watch channel is
//! checked at the top of every cycle, so a stop request takes effect within
//! one interval. A single event's failure never terminates the loop.

use crate::api::EventApi;
use crate::error::Result;
use crate::event::{Event, Language, SystemType};
use crate::signal::SignalChannel;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

/// Recurring consumer of the signal channel.
pub struct Poller {
    api: EventApi,
    signal: SignalChannel,
    interval: Duration,
}

/// Create a shutdown pair for [`Poller::run`]. Send `true` to stop.
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

impl Poller {
    pub fn new(api: EventApi, signal: SignalChannel, interval: Duration) -> Self {
        Self {
            api,
            signal,
            interval,
        }
    }

    /// Run cycles until the shutdown channel signals `true`.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(interval_secs = self.interval.as_secs_f64(), "Poller started");

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    if *shutdown.borrow() {
                        break;
                    }
                    if let Err(e) = self.cycle().await {
                        // Report and move on to the next cycle
                        error!(error = %e, "Poller cycle failed");
                    }
                }
            }
        }

        info!("Poller stopped");
    }

    /// One cycle: read the slot, consume the token, process the event.
    async fn cycle(&self) -> Result<()> {
        let raw = self.signal.read()?;
        let token = raw.trim();
        if token.is_empty() {
            return Ok(());
        }

        // Consume the slot so one signal yields one event
        self.signal.clear()?;

        let event_type = match token.parse() {
            Ok(event_type) => event_type,
            Err(e) => {
                warn!(token, "Discarding unrecognized signal token");
                return Err(e);
            }
        };

        let event = Event::new(event_type, SystemType::AutoDocGenerator, Language::Python);
        self.api.process(&event).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::Dispatcher;
    use crate::logger::EventLogger;
    use crate::recovery::{RemedySource, NO_SOLUTION};
    use async_trait::async_trait;

    struct NoRemedy;

    #[async_trait]
    impl RemedySource for NoRemedy {
        async fn suggest_remedy(&self, _error_text: &str) -> Result<String> {
            Ok(NO_SOLUTION.to_string())
        }
    }

    fn poller(dir: &tempfile::TempDir, interval: Duration) -> Poller {
        let logger = EventLogger::new(dir.path().join("event_log.txt"), Box::new(NoRemedy));
        let api = EventApi::new(Dispatcher::new(), logger);
        let signal = SignalChannel::new(dir.path().join("communication.txt"));
        Poller::new(api, signal, interval)
    }

    #[tokio::test]
    async fn test_signal_drives_one_logged_event() {
        let dir = tempfile::tempdir().unwrap();
        let poller = poller(&dir, Duration::from_millis(10));
        poller.signal.write("creation").unwrap();

        poller.cycle().await.unwrap();

        let contents = std::fs::read_to_string(dir.path().join("event_log.txt")).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.contains("Event Type: creation"));

        // Slot was consumed: the next cycle is idle
        poller.cycle().await.unwrap();
        let contents = std::fs::read_to_string(dir.path().join("event_log.txt")).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_empty_signal_is_idle_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let poller = poller(&dir, Duration::from_millis(10));

        poller.cycle().await.unwrap();
        assert!(!dir.path().join("event_log.txt").exists());
    }

    #[tokio::test]
    async fn test_bad_token_fails_cycle_but_consumes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let poller = poller(&dir, Duration::from_millis(10));
        poller.signal.write("not-an-event").unwrap();

        assert!(poller.cycle().await.is_err());
        assert_eq!(poller.signal.read().unwrap(), "");
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let poller = poller(&dir, Duration::from_millis(5));
        let (tx, rx) = shutdown_channel();

        let handle = tokio::spawn(async move { poller.run(rx).await });

        tokio::time::sleep(Duration::from_millis(20)).await;
        tx.send(true).unwrap();

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("poller did not stop after shutdown signal")
            .unwrap();
    }

    #[tokio::test]
    async fn test_run_processes_signal_then_keeps_going() {
        let dir = tempfile::tempdir().unwrap();
        let poller = poller(&dir, Duration::from_millis(5));
        let signal = poller.signal.clone();
        let log_path = dir.path().join("event_log.txt");
        let (tx, rx) = shutdown_channel();

        let handle = tokio::spawn(async move { poller.run(rx).await });

        signal.write("deletion").unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .unwrap()
            .unwrap();

        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("Event Type: deletion"));
    }
}
