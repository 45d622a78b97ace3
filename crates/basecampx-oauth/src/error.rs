//! Error types for the authorization flow.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, OAuthError>;

/// Errors that can occur while talking to the token endpoint.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Connection failure, timeout or other transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Token endpoint answered with a non-2xx status.
    ///
    /// OAuth error codes such as `invalid_grant` are not interpreted; the
    /// raw body is kept for the caller.
    #[error("Token endpoint returned {status}: {body}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body was not the expected JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl OAuthError {
    /// HTTP status of a rejected exchange, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            OAuthError::Backend { status, .. } => Some(*status),
            OAuthError::Network(e) => e.status().map(|s| s.as_u16()),
            OAuthError::Serialization(_) => None,
        }
    }
}
