//! Error types for quote fetching.

use thiserror::Error;

/// Failure of a single quote fetch attempt.
///
/// Every cause surfaces identically as a `FetchFailed` event; the variants
/// only preserve where the attempt broke down, for logging and display.
/// Errors ride inside events, hence `Clone` and `PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network or request failure before a usable response arrived.
    #[error("request to quote service failed: {reason}")]
    Transport { reason: String },

    /// The quote service answered with a non-success status.
    #[error("quote service returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The response body was not a valid quote payload.
    #[error("malformed quote payload: {reason}")]
    Decode { reason: String },
}

impl FetchError {
    /// Short human-readable message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "Could not reach the quote service",
            FetchError::UpstreamStatus { .. } => "The quote service is unavailable",
            FetchError::Decode { .. } => "Received an unreadable quote",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode {
                reason: err.to_string(),
            }
        } else {
            FetchError::Transport {
                reason: err.to_string(),
            }
        }
    }
}
