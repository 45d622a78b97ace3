//! Comments API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;
use crate::types::CommentRequest;

/// Kinds of items that can be commented on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSection {
    Messages,
    Todos,
    Documents,
    Uploads,
}

impl CommentSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentSection::Messages => "messages",
            CommentSection::Todos => "todos",
            CommentSection::Documents => "documents",
            CommentSection::Uploads => "uploads",
        }
    }
}

/// Comments API client.
pub struct CommentsApi {
    scope: ProjectScope,
}

impl CommentsApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    /// Comment on a message, todo, document or upload.
    pub async fn create(
        &self,
        section: CommentSection,
        item_id: u64,
        request: CommentRequest,
    ) -> Result<Value> {
        let path = self
            .scope
            .path(&format!("{}/{}/comments", section.as_str(), item_id));
        self.scope.client.post(&path, &request).await
    }

    /// Delete a comment.
    pub async fn delete(&self, comment_id: u64) -> Result<()> {
        self.scope
            .client
            .delete(&self.scope.path(&format!("comments/{}", comment_id)))
            .await
    }
}
