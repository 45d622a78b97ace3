//! Messages API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;
use crate::types::MessageRequest;

/// Messages API client.
pub struct MessagesApi {
    scope: ProjectScope,
}

impl MessagesApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    fn path(&self, message_id: u64) -> String {
        self.scope.path(&format!("messages/{}", message_id))
    }

    /// Get a message with its comments.
    pub async fn get(&self, message_id: u64) -> Result<Value> {
        self.scope.client.get(&self.path(message_id)).await
    }

    /// Post a new message.
    pub async fn create(&self, request: MessageRequest) -> Result<Value> {
        self.scope
            .client
            .post(&self.scope.path("messages"), &request)
            .await
    }

    /// Update a message.
    pub async fn update(&self, message_id: u64, request: MessageRequest) -> Result<Value> {
        self.scope.client.put(&self.path(message_id), &request).await
    }

    /// Delete a message.
    pub async fn delete(&self, message_id: u64) -> Result<()> {
        self.scope.client.delete(&self.path(message_id)).await
    }
}
