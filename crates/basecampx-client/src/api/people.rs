//! People API.

use serde_json::Value;

use crate::client::BasecampClient;
use crate::error::Result;

/// People API client.
pub struct PeopleApi {
    client: BasecampClient,
}

impl PeopleApi {
    pub(crate) fn new(client: BasecampClient) -> Self {
        Self { client }
    }

    /// List everyone in the account.
    pub async fn list(&self) -> Result<Value> {
        self.client.get("people").await
    }

    /// The person the access token belongs to.
    pub async fn me(&self) -> Result<Value> {
        self.client.get("people/me").await
    }

    pub async fn get(&self, person_id: u64) -> Result<Value> {
        self.client.get(&format!("people/{}", person_id)).await
    }

    /// Todos assigned to a person, grouped by todo list.
    pub async fn assigned_todos(&self, person_id: u64) -> Result<Value> {
        self.client
            .get(&format!("people/{}/assigned_todos", person_id))
            .await
    }

    /// Remove a person from the account.
    pub async fn delete(&self, person_id: u64) -> Result<()> {
        self.client.delete(&format!("people/{}", person_id)).await
    }
}
