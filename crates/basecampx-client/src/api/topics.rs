//! Topics API.

use serde_json::Value;

use super::ProjectScope;
use crate::error::Result;

/// Discussions in a project.
pub struct TopicsApi {
    scope: ProjectScope,
}

impl TopicsApi {
    pub(crate) fn new(scope: ProjectScope) -> Self {
        Self { scope }
    }

    /// List every topic in the project, following pagination.
    pub async fn list(&self) -> Result<Vec<Value>> {
        self.scope
            .client
            .get_all_pages(&self.scope.path("topics"), &[])
            .await
    }

    /// List a single page of topics (1-based).
    pub async fn list_page(&self, page: u32) -> Result<Vec<Value>> {
        self.scope
            .client
            .get_page(&self.scope.path("topics"), page, &[])
            .await
    }
}
