//! Integration tests for the authorization-code flow against a mock server.

use basecampx_oauth::{Authorizer, Credentials, OAuthConfig, OAuthError};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn authorizer(server: &MockServer) -> Authorizer {
    Authorizer::with_config(
        Credentials::new("cid", "csec", "http://x/cb"),
        OAuthConfig::with_base(&server.uri()),
    )
}

#[test]
fn test_authorize_url_query_pairs() {
    let auth = Authorizer::new(Credentials::new("cid", "csec", "http://x/cb"));
    let url = Url::parse(&auth.authorize_url()).unwrap();

    assert_eq!(url.host_str(), Some("basecamp.com"));
    assert_eq!(url.path(), "/authorize");

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("client_id".to_string(), "cid".to_string()),
            ("redirect_uri".to_string(), "http://x/cb".to_string()),
            ("type".to_string(), "web_server".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_access_token_posts_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authorize/token"))
        .and(query_param("type", "web_server"))
        .and(query_param("client_id", "cid"))
        .and(query_param("redirect_uri", "http://x/cb"))
        .and(query_param("client_secret", "csec"))
        .and(query_param("code", "the-code"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "tok123"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = authorizer(&server).access_token("the-code").await.unwrap();
    assert_eq!(token.access_token, "tok123");

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].method.as_str(), "POST");
}

#[tokio::test]
async fn test_access_token_passes_through_extra_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authorize/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok",
            "expires_in": 1209600,
            "refresh_token": "ref"
        })))
        .mount(&server)
        .await;

    let token = authorizer(&server).access_token("c").await.unwrap();
    assert_eq!(token.expires_in_secs(), Some(1_209_600));
    assert_eq!(token.refresh_token_str(), Some("ref"));
}

#[tokio::test]
async fn test_access_token_does_not_validate_optional_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authorize/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "tok123",
            "expires_in": "1209600"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = authorizer(&server).access_token("c").await.unwrap();
    assert_eq!(token.access_token, "tok123");
    assert_eq!(token.expires_in, Some(serde_json::json!("1209600")));
}

#[tokio::test]
async fn test_access_token_rejected_grant_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authorize/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({"error": "invalid_grant"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = authorizer(&server).access_token("stale").await.unwrap_err();
    match &err {
        OAuthError::Backend { status, body } => {
            assert_eq!(*status, 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected backend error, got {:?}", other),
    }
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn test_access_token_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authorize/token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = authorizer(&server).access_token("c").await.unwrap_err();
    assert!(matches!(err, OAuthError::Serialization(_)));
}

#[tokio::test]
async fn test_access_token_connection_refused() {
    // Nothing listens on port 1.
    let config = OAuthConfig::with_base("http://127.0.0.1:1");
    let auth = Authorizer::with_config(Credentials::new("cid", "csec", "http://x/cb"), config);
    let err = auth.access_token("c").await.unwrap_err();
    assert!(matches!(err, OAuthError::Network(_)));
}
