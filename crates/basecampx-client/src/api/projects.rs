//! Projects API.

use serde_json::{Value, json};

use super::{
    CalendarEventParent, CalendarEventsApi, CommentsApi, DocumentsApi, MessagesApi, ProjectScope,
    TodoListsApi, TodosApi, TopicsApi, UploadsApi,
};
use crate::client::BasecampClient;
use crate::error::Result;
use crate::types::{AccessGrant, ProjectRequest};

/// Account-wide project operations.
pub struct ProjectsApi {
    client: BasecampClient,
}

impl ProjectsApi {
    pub(crate) fn new(client: BasecampClient) -> Self {
        Self { client }
    }

    /// List active projects.
    pub async fn list(&self) -> Result<Value> {
        self.client.get("projects").await
    }

    /// List archived projects.
    pub async fn list_archived(&self) -> Result<Value> {
        self.client.get("projects/archived").await
    }

    /// Create a new project.
    pub async fn create(&self, request: ProjectRequest) -> Result<Value> {
        self.client.post("projects", &request).await
    }
}

/// Operations on one project, and access to its sections.
pub struct ProjectApi {
    scope: ProjectScope,
}

impl ProjectApi {
    pub(crate) fn new(client: BasecampClient, project_id: u64) -> Self {
        Self {
            scope: ProjectScope::new(client, project_id),
        }
    }

    pub fn id(&self) -> u64 {
        self.scope.project_id
    }

    fn path(&self) -> String {
        format!("projects/{}", self.scope.project_id)
    }

    /// Get the project.
    pub async fn get(&self) -> Result<Value> {
        self.scope.client.get(&self.path()).await
    }

    /// Rename the project or change its description.
    pub async fn update(&self, request: ProjectRequest) -> Result<Value> {
        self.scope.client.put(&self.path(), &request).await
    }

    /// Archive the project.
    pub async fn archive(&self) -> Result<Value> {
        self.set_archived(true).await
    }

    /// Bring an archived project back.
    pub async fn activate(&self) -> Result<Value> {
        self.set_archived(false).await
    }

    async fn set_archived(&self, archived: bool) -> Result<Value> {
        self.scope
            .client
            .put(&self.path(), &json!({ "archived": archived }))
            .await
    }

    /// Delete the project.
    pub async fn delete(&self) -> Result<()> {
        self.scope.client.delete(&self.path()).await
    }

    /// People with access to the project.
    pub async fn accesses(&self) -> Result<Value> {
        self.scope.client.get(&self.scope.path("accesses")).await
    }

    /// Grant access to existing people by id or invite new ones by email.
    ///
    /// An empty grant sends nothing.
    pub async fn grant_access(&self, grant: AccessGrant) -> Result<()> {
        if grant.is_empty() {
            return Ok(());
        }
        self.scope
            .client
            .post_no_content(&self.scope.path("accesses"), &grant)
            .await
    }

    /// Remove a person's access.
    pub async fn revoke_access(&self, person_id: u64) -> Result<()> {
        self.scope
            .client
            .delete(&self.scope.path(&format!("accesses/{}", person_id)))
            .await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sections
    // ─────────────────────────────────────────────────────────────────────────

    pub fn topics(&self) -> TopicsApi {
        TopicsApi::new(self.scope.clone())
    }

    pub fn messages(&self) -> MessagesApi {
        MessagesApi::new(self.scope.clone())
    }

    pub fn comments(&self) -> CommentsApi {
        CommentsApi::new(self.scope.clone())
    }

    pub fn todo_lists(&self) -> TodoListsApi {
        TodoListsApi::new(self.scope.clone())
    }

    pub fn todos(&self) -> TodosApi {
        TodosApi::new(self.scope.clone())
    }

    pub fn documents(&self) -> DocumentsApi {
        DocumentsApi::new(self.scope.clone())
    }

    pub fn uploads(&self) -> UploadsApi {
        UploadsApi::new(self.scope.clone())
    }

    /// The project's schedule.
    pub fn calendar_events(&self) -> CalendarEventsApi {
        CalendarEventsApi::new(
            self.scope.client.clone(),
            CalendarEventParent::Project(self.scope.project_id),
        )
    }
}
