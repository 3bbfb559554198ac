//! Error types for NLIP envelope handling and transport

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NlipError>;

/// Errors surfaced by envelope decoding and by the transport client.
///
/// None of these are fatal to a client instance: every failure rejects the
/// in-flight call and leaves the stored correlator untouched.
#[derive(Debug, Clone, Error)]
pub enum NlipError {
    /// The server answered with a non-2xx status.
    #[error("transport error: HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    /// The request exceeded the configured timeout.
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The request never produced an HTTP status (refused, reset, DNS).
    #[error("connection error: {0}")]
    Connection(String),

    /// A local file could not be read for base64 encoding.
    #[error("encoding error: {path}: {message}")]
    Encoding { path: String, message: String },

    /// A payload was not a valid envelope.
    #[error("decode error: {0}")]
    Decode(String),
}

impl NlipError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, NlipError::Timeout(_))
    }

    /// HTTP status carried by a transport error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            NlipError::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NlipError {
    fn from(e: serde_json::Error) -> Self {
        NlipError::Decode(e.to_string())
    }
}
