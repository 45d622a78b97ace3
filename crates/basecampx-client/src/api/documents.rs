//! Documents API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;
use crate::types::DocumentRequest;

/// Text documents in a project.
pub struct DocumentsApi {
    scope: ProjectScope,
}

impl DocumentsApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    fn path(&self, document_id: u64) -> String {
        self.scope.path(&format!("documents/{}", document_id))
    }

    pub async fn list(&self) -> Result<Value> {
        self.scope.client.get(&self.scope.path("documents")).await
    }

    pub async fn get(&self, document_id: u64) -> Result<Value> {
        self.scope.client.get(&self.path(document_id)).await
    }

    pub async fn create(&self, request: DocumentRequest) -> Result<Value> {
        self.scope
            .client
            .post(&self.scope.path("documents"), &request)
            .await
    }

    pub async fn update(&self, document_id: u64, request: DocumentRequest) -> Result<Value> {
        self.scope.client.put(&self.path(document_id), &request).await
    }

    pub async fn delete(&self, document_id: u64) -> Result<()> {
        self.scope.client.delete(&self.path(document_id)).await
    }
}
