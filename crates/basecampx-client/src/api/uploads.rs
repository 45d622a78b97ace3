//! Uploads API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;
use crate::types::UploadRequest;

/// Files section of a project.
///
/// Files must first be sent through
/// [`AttachmentsApi::upload`](super::AttachmentsApi::upload); the returned
/// tokens are then referenced here.
pub struct UploadsApi {
    scope: ProjectScope,
}

impl UploadsApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    fn path(&self, upload_id: u64) -> String {
        self.scope.path(&format!("uploads/{}", upload_id))
    }

    pub async fn get(&self, upload_id: u64) -> Result<Value> {
        self.scope.client.get(&self.path(upload_id)).await
    }

    pub async fn create(&self, request: UploadRequest) -> Result<Value> {
        self.scope
            .client
            .post(&self.scope.path("uploads"), &request)
            .await
    }

    pub async fn delete(&self, upload_id: u64) -> Result<()> {
        self.scope.client.delete(&self.path(upload_id)).await
    }
}
