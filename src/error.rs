//! Error types for the event automation pipeline
//!
//! One variant per failure class: malformed responses, malformed input,
//! vocabulary/registry misconfiguration, network faults, append faults.

use thiserror::Error;

/// All error variants are part of the public API.
#[derive(Error, Debug)]
pub enum AutodocError {
    /// Response payload does not match the expected prediction schema.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Caller-supplied query is empty or otherwise unusable.
    #[error("Input error: {0}")]
    Input(String),

    /// A value outside the enumerated event vocabulary, or a language with
    /// no registered automation handler.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network failure during generation or the recovery lookup.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Log append or signal file failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AutodocError {
    /// Whether this error came from the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, AutodocError::Transport(_))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AutodocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = AutodocError::Schema("no predictions found".to_string());
        assert_eq!(format!("{}", e), "Schema error: no predictions found");

        let e = AutodocError::Configuration("unknown language 'Ruby'".to_string());
        assert!(format!("{}", e).contains("Ruby"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e: AutodocError = io.into();
        assert!(matches!(e, AutodocError::Io(_)));
        assert!(!e.is_transport());
    }
}
