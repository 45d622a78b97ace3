//! Authorization URL construction and code-for-token exchange.

use serde::{Deserialize, Serialize};

use crate::error::{OAuthError, Result};

/// Flow variant Basecamp expects on both the authorize and token endpoints.
const FLOW_TYPE: &str = "web_server";

/// Application credentials registered with Basecamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }
}

/// Endpoints used by the flow.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub authorize_url: String,
    pub token_url: String,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self::basecamp()
    }
}

impl OAuthConfig {
    /// Production Basecamp endpoints.
    pub fn basecamp() -> Self {
        Self {
            authorize_url: "https://basecamp.com/authorize".to_string(),
            token_url: "https://basecamp.com/authorize/token".to_string(),
        }
    }

    /// Endpoints rooted at an arbitrary base URL, e.g. a local mock server.
    pub fn with_base(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            authorize_url: format!("{}/authorize", base),
            token_url: format!("{}/authorize/token", base),
        }
    }
}

/// Body returned by the token endpoint.
///
/// Only `access_token` is required. Everything else the service sends is
/// kept as raw JSON, whatever its type; expiry is not tracked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenResponse {
    /// `expires_in` as seconds, when the service sent a number.
    pub fn expires_in_secs(&self) -> Option<u64> {
        self.expires_in.as_ref().and_then(|v| v.as_u64())
    }

    /// `refresh_token`, when the service sent a string.
    pub fn refresh_token_str(&self) -> Option<&str> {
        self.refresh_token.as_ref().and_then(|v| v.as_str())
    }
}

/// Drives the authorization-code flow for one set of credentials.
#[derive(Debug, Clone)]
pub struct Authorizer {
    credentials: Credentials,
    config: OAuthConfig,
    http: reqwest::Client,
}

impl Authorizer {
    /// Authorizer against the production endpoints.
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(credentials, OAuthConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: OAuthConfig) -> Self {
        Self {
            credentials,
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// URL of the dialog where the user grants access.
    ///
    /// Pure: no network call, same output for the same credentials.
    pub fn authorize_url(&self) -> String {
        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("type", FLOW_TYPE),
        ];

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.authorize_url, query)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// Issues exactly one POST. Failures are returned without retry.
    pub async fn access_token(&self, code: &str) -> Result<TokenResponse> {
        let params = [
            ("type", FLOW_TYPE),
            ("client_id", self.credentials.client_id.as_str()),
            ("redirect_uri", self.credentials.redirect_uri.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("code", code),
        ];

        tracing::debug!(token_url = %self.config.token_url, "Exchanging authorization code");

        let response = self
            .http
            .post(&self.config.token_url)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token exchange rejected");
            return Err(OAuthError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorizer() -> Authorizer {
        Authorizer::new(Credentials::new("cid", "csec", "http://x/cb"))
    }

    #[test]
    fn test_authorize_url_is_deterministic() {
        let auth = authorizer();
        assert_eq!(auth.authorize_url(), auth.authorize_url());
    }

    #[test]
    fn test_authorize_url_params() {
        let url = authorizer().authorize_url();

        assert!(url.starts_with("https://basecamp.com/authorize?"));
        assert!(url.contains("client_id=cid"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Fx%2Fcb"));
        assert!(url.contains("type=web_server"));
        assert!(!url.contains("csec"));
    }

    #[test]
    fn test_config_with_base_trims_slash() {
        let config = OAuthConfig::with_base("http://127.0.0.1:9000/");
        assert_eq!(config.authorize_url, "http://127.0.0.1:9000/authorize");
        assert_eq!(config.token_url, "http://127.0.0.1:9000/authorize/token");
    }

    #[test]
    fn test_token_response_keeps_unknown_fields() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token":"tok","expires_in":1209600,"refresh_token":"ref","token_type":"bearer"}"#,
        )
        .unwrap();

        assert_eq!(token.access_token, "tok");
        assert_eq!(token.expires_in_secs(), Some(1_209_600));
        assert_eq!(token.refresh_token_str(), Some("ref"));
        assert_eq!(token.extra["token_type"], "bearer");
    }

    #[test]
    fn test_token_response_accepts_any_field_types() {
        let token: TokenResponse = serde_json::from_str(
            r#"{"access_token":"tok123","expires_in":"1209600","refresh_token":null}"#,
        )
        .unwrap();

        assert_eq!(token.access_token, "tok123");
        assert_eq!(token.expires_in, Some(serde_json::json!("1209600")));
        assert_eq!(token.expires_in_secs(), None);
        assert_eq!(token.refresh_token_str(), None);
    }

    #[test]
    fn test_token_response_minimal() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"tok123"}"#).unwrap();
        assert_eq!(token.access_token, "tok123");
        assert!(token.expires_in.is_none());
        assert!(token.refresh_token.is_none());
        assert!(token.extra.is_empty());
    }
}
