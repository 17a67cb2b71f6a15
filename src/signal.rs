//! Single-slot signal channel
//!
//! A last-write-wins textual mailbox persisted as one UTF-8 file at a
//! well-known location. A write overwrites any previous value; absence reads
//! as empty text. Not transactional: a concurrent write during a read has
//! unspecified ordering, which is a documented limitation of this primitive.

use crate::error::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Default slot location, relative to the working directory.
pub const DEFAULT_SIGNAL_PATH: &str = "communication.txt";

/// File-backed single-slot mailbox.
#[derive(Debug, Clone)]
pub struct SignalChannel {
    path: PathBuf,
}

impl SignalChannel {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with a new message.
    pub fn write(&self, message: &str) -> Result<()> {
        std::fs::write(&self.path, message)?;
        Ok(())
    }

    /// Read the current slot content, or empty text if never written.
    pub fn read(&self) -> Result<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reset the slot to empty.
    pub fn clear(&self) -> Result<()> {
        self.write("")
    }
}

impl Default for SignalChannel {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNAL_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> (tempfile::TempDir, SignalChannel) {
        let dir = tempfile::tempdir().unwrap();
        let channel = SignalChannel::new(dir.path().join("communication.txt"));
        (dir, channel)
    }

    #[test]
    fn test_read_without_write_is_empty() {
        let (_dir, channel) = channel();
        assert_eq!(channel.read().unwrap(), "");
    }

    #[test]
    fn test_write_then_read() {
        let (_dir, channel) = channel();
        channel.write("start").unwrap();
        assert_eq!(channel.read().unwrap(), "start");
    }

    #[test]
    fn test_last_write_wins() {
        let (_dir, channel) = channel();
        channel.write("first").unwrap();
        channel.write("second").unwrap();
        assert_eq!(channel.read().unwrap(), "second");
    }

    #[test]
    fn test_clear_resets_slot() {
        let (_dir, channel) = channel();
        channel.write("pending").unwrap();
        channel.clear().unwrap();
        assert_eq!(channel.read().unwrap(), "");
    }
}
