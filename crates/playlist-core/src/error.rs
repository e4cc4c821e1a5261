//! Fetch Errors
//!
//! Every way a playlist request can fail, as seen by the client.

/// Classified failure of a playlist fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (offline, CORS, aborted)
    Network { message: String },
    /// The backend answered with a non-success status
    Status { status: u16 },
    /// The body could not be decoded into a playlist collection
    MalformedResponse { reason: String },
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network { message: message.into() }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        FetchError::MalformedResponse { reason: reason.into() }
    }

    /// Short label for the error banner
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Status { .. } => "status",
            FetchError::MalformedResponse { .. } => "malformed",
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network { message } => write!(f, "Network failure: {}", message),
            FetchError::Status { status } => write!(f, "Server responded with status {}", status),
            FetchError::MalformedResponse { reason } => write!(f, "Malformed response: {}", reason),
        }
    }
}

impl std::error::Error for FetchError {}
