//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading a local file for upload failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Server answered with a non-2xx status.
    #[error("Got {status} error while making a {method} request on {url}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Request method.
        method: String,
        /// Request URL.
        url: String,
    },

    /// Server rejected the access token (401).
    #[error("Unauthorized {method} request on {url}")]
    Unauthorized {
        /// Request method.
        method: String,
        /// Request URL.
        url: String,
    },

    /// An account-scoped request was made on a client without an account id.
    #[error("Pass an account id to the client to make this request")]
    MissingAccount,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build the error for a failed response.
    pub(crate) fn from_status(status: u16, method: &reqwest::Method, url: &url::Url) -> Self {
        let method = method.to_string();
        let url = url.to_string();
        if status == 401 {
            Error::Unauthorized { method, url }
        } else {
            Error::Api {
                status,
                method,
                url,
            }
        }
    }

    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Unauthorized { .. } => Some(401),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::Api { status: 429, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_unauthorized() {
        let url = url::Url::parse("https://basecamp.com/1/api/v1/projects.json").unwrap();
        let err = Error::from_status(401, &reqwest::Method::GET, &url);
        assert!(err.is_auth_error());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_from_status_message() {
        let url = url::Url::parse("https://basecamp.com/1/api/v1/projects/9.json").unwrap();
        let err = Error::from_status(404, &reqwest::Method::GET, &url);
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Got 404 error while making a GET request on https://basecamp.com/1/api/v1/projects/9.json"
        );
    }

    #[test]
    fn test_classification() {
        let url = url::Url::parse("https://basecamp.com/").unwrap();
        assert!(Error::from_status(503, &reqwest::Method::POST, &url).is_server_error());
        assert!(Error::from_status(429, &reqwest::Method::GET, &url).is_rate_limited());
        assert!(!Error::MissingAccount.is_server_error());
        assert_eq!(Error::MissingAccount.status(), None);
    }
}
