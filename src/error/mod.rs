//! Error types for Parlor.

use thiserror::Error;

/// Primary error type for all Parlor operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A request was rejected before any remote call was attempted.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reaching the provider failed at the network layer.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// A run ended in a non-completed terminal state, or polling gave up.
    #[error("service error: {0}")]
    Service(String),

    /// A provider payload did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Startup or environment problem.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Coarse error category, used for logging and HTTP status mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Service,
    Parse,
    Configuration,
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an error for a non-success provider response.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a service error.
    pub fn service(message: impl Into<String>) -> Self {
        Self::Service(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Classify this error into a category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Transport(_) | Self::Api { .. } => ErrorKind::Transport,
            Self::Service(_) => ErrorKind::Service,
            Self::Parse(_) | Self::Serialization(_) => ErrorKind::Parse,
            Self::Io(_) | Self::Configuration(_) => ErrorKind::Configuration,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_failures_report_as_transport() {
        assert_eq!(Error::api(500, "boom").kind(), ErrorKind::Transport);
    }

    #[test]
    fn payload_shape_failures_report_as_parse() {
        let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        assert_eq!(Error::from(serde_err).kind(), ErrorKind::Parse);
        assert_eq!(Error::parse("missing field").kind(), ErrorKind::Parse);
    }

    #[test]
    fn run_outcome_failures_report_as_service() {
        assert_eq!(Error::service("run expired").kind(), ErrorKind::Service);
    }
}
