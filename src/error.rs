// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the workout library.
//!
//! The counting core itself never fails: malformed keypoints degrade to
//! "skip this person this frame". These errors cover the surfaces around it
//! (configuration, replaying keypoint files, and the CLI).

use std::fmt;

/// Result type alias for workout operations.
pub type Result<T> = std::result::Result<T, GymError>;

/// Main error type for the workout library.
#[derive(Debug)]
pub enum GymError {
    /// Invalid configuration provided.
    ConfigError(String),
    /// Keypoint source could not be opened or read.
    SourceError(String),
    /// A keypoint record could not be parsed.
    ParseError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Wrapped `serde_json::Error`
    Json(serde_json::Error),
}

impl fmt::Display for GymError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::SourceError(msg) => write!(f, "Source error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for GymError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GymError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for GymError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
