// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// The single failure kind surfaced by the feedback widget.
///
/// Network errors, non-success HTTP statuses, timeouts and malformed
/// responses all collapse into this type. The reason is kept for logging
/// only; the widget never branches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFailed {
    reason: String,
}

impl SubmissionFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Failure produced when the transport did not answer in time.
    pub fn timed_out(after: Duration) -> Self {
        Self::new(format!("no response after {}s", after.as_secs_f32()))
    }

    /// Human-readable cause, suitable for logs.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for SubmissionFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Submission failed: {}", self.reason)
    }
}

impl std::error::Error for SubmissionFailed {}

impl From<reqwest::Error> for SubmissionFailed {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new("request timed out")
        } else if err.is_connect() {
            Self::new(format!("connection failed: {err}"))
        } else {
            Self::new(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SubmissionFailed {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("malformed response: {err}"))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Config(format!("HTTP client: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
