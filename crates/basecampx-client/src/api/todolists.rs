//! Todo lists API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;
use crate::types::TodoListRequest;

/// Todo lists API client.
pub struct TodoListsApi {
    scope: ProjectScope,
}

impl TodoListsApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    fn path(&self, todolist_id: u64) -> String {
        self.scope.path(&format!("todolists/{}", todolist_id))
    }

    /// List todo lists that still have open todos.
    pub async fn list(&self) -> Result<Value> {
        self.scope.client.get(&self.scope.path("todolists")).await
    }

    /// List completed todo lists.
    pub async fn list_completed(&self) -> Result<Value> {
        self.scope
            .client
            .get(&self.scope.path("todolists/completed"))
            .await
    }

    /// Get a todo list with its todos.
    pub async fn get(&self, todolist_id: u64) -> Result<Value> {
        self.scope.client.get(&self.path(todolist_id)).await
    }

    pub async fn create(&self, request: TodoListRequest) -> Result<Value> {
        self.scope
            .client
            .post(&self.scope.path("todolists"), &request)
            .await
    }

    /// Rename, describe or reorder a todo list.
    pub async fn update(&self, todolist_id: u64, request: TodoListRequest) -> Result<Value> {
        self.scope.client.put(&self.path(todolist_id), &request).await
    }

    pub async fn delete(&self, todolist_id: u64) -> Result<()> {
        self.scope.client.delete(&self.path(todolist_id)).await
    }
}
