//! API endpoint implementations.

mod attachments;
mod calendar_events;
mod calendars;
mod comments;
mod documents;
mod events;
mod messages;
mod people;
mod projects;
mod resource;
mod todolists;
mod todos;
mod topics;
mod uploads;

pub use attachments::AttachmentsApi;
pub use calendar_events::{CalendarEventParent, CalendarEventsApi};
pub use calendars::CalendarsApi;
pub use comments::{CommentSection, CommentsApi};
pub use documents::DocumentsApi;
pub use events::EventsApi;
pub use messages::MessagesApi;
pub use people::PeopleApi;
pub use projects::{ProjectApi, ProjectsApi};
pub use resource::ResourceApi;
pub use todolists::TodoListsApi;
pub use todos::TodosApi;
pub use topics::TopicsApi;
pub use uploads::UploadsApi;

use crate::client::BasecampClient;

/// A client bound to one project. Sections that only exist inside a
/// project (messages, todos, ...) resolve their paths through it.
#[derive(Clone)]
pub(crate) struct ProjectScope {
    pub(crate) client: BasecampClient,
    pub(crate) project_id: u64,
}

impl ProjectScope {
    pub(crate) fn new(client: BasecampClient, project_id: u64) -> Self {
        Self { client, project_id }
    }

    /// Path of `rest` inside the project.
    pub(crate) fn path(&self, rest: &str) -> String {
        format!("projects/{}/{}", self.project_id, rest)
    }
}
