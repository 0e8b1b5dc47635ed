//! Error types for remote collection access.

use thiserror::Error;

/// Failures a remote collection operation can report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Network failure or a non-success HTTP status.
    #[error("transport error{}: {message}", status_suffix(.status))]
    Transport {
        /// HTTP status code, when a response was received at all
        status: Option<u16>,
        message: String,
    },

    /// A list response that was not an array of records.
    #[error("invalid response shape: {0}")]
    InvalidResponseShape(String),
}

impl Error {
    /// A response arrived with a non-success status.
    pub fn status(code: u16) -> Self {
        Error::Transport {
            status: Some(code),
            message: format!("request failed with status {code}"),
        }
    }

    /// No usable response arrived (connection refused, timeout, ...).
    pub fn network(message: impl Into<String>) -> Self {
        Error::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// Status code carried by a transport failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            Error::InvalidResponseShape(_) => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

/// Result type for remote collection operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = Error::status(500);
        assert_eq!(
            err.to_string(),
            "transport error (status 500): request failed with status 500"
        );

        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "transport error: connection refused");

        let err = Error::InvalidResponseShape("expected an array, got an object".into());
        assert_eq!(
            err.to_string(),
            "invalid response shape: expected an array, got an object"
        );
    }

    #[test]
    fn status_code_only_for_responses() {
        assert_eq!(Error::status(404).status_code(), Some(404));
        assert_eq!(Error::network("timed out").status_code(), None);
        assert_eq!(Error::InvalidResponseShape("x".into()).status_code(), None);
    }
}
