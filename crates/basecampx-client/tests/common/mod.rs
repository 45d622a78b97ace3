//! Shared helpers for integration tests.

#![allow(dead_code)]

use basecampx_client::BasecampClient;
use wiremock::MockServer;

pub const TOKEN: &str = "tok";
pub const USER_AGENT: &str = "Tests (tests@example.com)";
pub const ACCOUNT_ID: u64 = 999;

/// Client whose launchpad and account API both point at the mock server.
pub fn client(server: &MockServer, account_id: Option<u64>) -> BasecampClient {
    let mut builder = BasecampClient::builder()
        .access_token(TOKEN)
        .user_agent(USER_AGENT)
        .base_url(server.uri())
        .launchpad_url(server.uri());
    if let Some(id) = account_id {
        builder = builder.account_id(id);
    }
    builder.build().expect("failed to build client")
}

/// Path of an account API resource on the mock server.
pub fn api_path(rest: &str) -> String {
    format!("/{}/api/v1/{}.json", ACCOUNT_ID, rest)
}

/// `n` numbered JSON objects, as a paginated endpoint would return.
pub fn items(start: u64, n: u64) -> serde_json::Value {
    serde_json::Value::Array(
        (start..start + n)
            .map(|id| serde_json::json!({ "id": id }))
            .collect(),
    )
}
