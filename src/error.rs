use thiserror::Error;

/// Errors that can occur when fetching a match
#[derive(Debug, Error)]
pub enum MatchingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to decode match: {0}")]
    Decode(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    #[error("Match call was cancelled")]
    Cancelled,
}

impl MatchingError {
    /// Whether the failure happened between the client and the server
    /// rather than in the request itself or in the payload
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            MatchingError::Transport(_) | MatchingError::UnexpectedStatus { .. }
        )
    }
}
