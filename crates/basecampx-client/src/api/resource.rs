//! Generic read access to any account API path.

use serde::Serialize;
use serde_json::Value;

use crate::client::BasecampClient;
use crate::error::Result;

/// Plain GET access under a path, for endpoints without a dedicated API.
pub struct ResourceApi {
    client: BasecampClient,
    path: String,
}

impl ResourceApi {
    pub(crate) fn new(client: BasecampClient, path: String) -> Self {
        Self { client, path }
    }

    /// GET `{path}.json`.
    pub async fn list(&self) -> Result<Value> {
        self.client.get(&self.path).await
    }

    /// GET `{path}.json` with query parameters.
    pub async fn list_with_query<Q: Serialize + ?Sized>(&self, query: &Q) -> Result<Value> {
        self.client.get_with_query(&self.path, query).await
    }

    /// GET `{path}/{id}.json`.
    pub async fn get(&self, id: impl std::fmt::Display) -> Result<Value> {
        self.client
            .get(&format!("{}/{}", self.path.trim_end_matches('/'), id))
            .await
    }
}
