//! Error types for the text-generation collaborator.

use thiserror::Error;

/// Result type for muse operations.
pub type MuseResult<T> = Result<T, MuseError>;

/// Errors a muse can hit while generating text.
///
/// None of these ever reach the player: [`fulfil`](crate::fulfil) swaps
/// each one for fixed fallback text.
#[derive(Debug, Error)]
pub enum MuseError {
    /// No API key is configured.
    #[error("no API key configured")]
    MissingKey,

    /// The service refused the API key (HTTP 401 or 403).
    #[error("API key rejected")]
    Unauthorized,

    /// The service is throttling us (HTTP 429).
    #[error("rate limited")]
    RateLimited,

    /// Any other non-success HTTP status.
    #[error("service returned {code}: {body}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body, as far as it could be read.
        body: String,
    },

    /// The request never got a response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response could not be decoded.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The response decoded but held no text.
    #[error("empty response")]
    Empty,
}

impl MuseError {
    /// Whether the failure means "nothing to say" rather than "something broke".
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::MissingKey | Self::Empty)
    }
}

impl From<reqwest::Error> for MuseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MuseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
