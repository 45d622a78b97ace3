//! Calendar events API.

use serde_json::Value;

use crate::client::BasecampClient;
use crate::error::Result;
use crate::types::CalendarEventRequest;

/// What a set of calendar events belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEventParent {
    /// A project's schedule.
    Project(u64),
    /// A standalone calendar.
    Calendar(u64),
}

impl CalendarEventParent {
    fn path(&self) -> String {
        match self {
            CalendarEventParent::Project(id) => format!("projects/{}", id),
            CalendarEventParent::Calendar(id) => format!("calendars/{}", id),
        }
    }
}

/// Calendar events API client.
pub struct CalendarEventsApi {
    client: BasecampClient,
    parent: CalendarEventParent,
}

impl CalendarEventsApi {
    pub(crate) fn new(client: BasecampClient, parent: CalendarEventParent) -> Self {
        Self { client, parent }
    }

    fn path(&self, rest: &str) -> String {
        format!("{}/calendar_events{}", self.parent.path(), rest)
    }

    /// Upcoming events.
    pub async fn list(&self) -> Result<Value> {
        self.client.get(&self.path("")).await
    }

    /// Past events.
    pub async fn list_past(&self) -> Result<Value> {
        self.client.get(&self.path("/past")).await
    }

    pub async fn get(&self, event_id: u64) -> Result<Value> {
        self.client.get(&self.path(&format!("/{}", event_id))).await
    }

    pub async fn create(&self, request: CalendarEventRequest) -> Result<Value> {
        self.client.post(&self.path(""), &request).await
    }

    pub async fn update(&self, event_id: u64, request: CalendarEventRequest) -> Result<Value> {
        self.client
            .put(&self.path(&format!("/{}", event_id)), &request)
            .await
    }

    pub async fn delete(&self, event_id: u64) -> Result<()> {
        self.client.delete(&self.path(&format!("/{}", event_id))).await
    }
}
