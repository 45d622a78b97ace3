//! Calendars API.

use serde_json::Value;

use crate::client::BasecampClient;
use crate::error::Result;
use crate::types::{AccessGrant, CalendarRequest};

/// Calendars API client.
pub struct CalendarsApi {
    client: BasecampClient,
}

impl CalendarsApi {
    pub(crate) fn new(client: BasecampClient) -> Self {
        Self { client }
    }

    fn path(calendar_id: u64) -> String {
        format!("calendars/{}", calendar_id)
    }

    pub async fn list(&self) -> Result<Value> {
        self.client.get("calendars").await
    }

    pub async fn get(&self, calendar_id: u64) -> Result<Value> {
        self.client.get(&Self::path(calendar_id)).await
    }

    pub async fn create(&self, name: impl Into<String>) -> Result<Value> {
        let request = CalendarRequest { name: name.into() };
        self.client.post("calendars", &request).await
    }

    /// Rename a calendar. The server replies with no content.
    pub async fn update(&self, calendar_id: u64, name: impl Into<String>) -> Result<()> {
        let request = CalendarRequest { name: name.into() };
        let _: Value = self.client.put(&Self::path(calendar_id), &request).await?;
        Ok(())
    }

    pub async fn delete(&self, calendar_id: u64) -> Result<()> {
        self.client.delete(&Self::path(calendar_id)).await
    }

    /// People with access to the calendar.
    pub async fn accesses(&self, calendar_id: u64) -> Result<Value> {
        self.client
            .get(&format!("calendars/{}/accesses", calendar_id))
            .await
    }

    /// Grant access by person id or email. An empty grant sends nothing.
    pub async fn grant_access(&self, calendar_id: u64, grant: AccessGrant) -> Result<()> {
        if grant.is_empty() {
            return Ok(());
        }
        self.client
            .post_no_content(&format!("calendars/{}/accesses", calendar_id), &grant)
            .await
    }

    pub async fn revoke_access(&self, calendar_id: u64, person_id: u64) -> Result<()> {
        self.client
            .delete(&format!("calendars/{}/accesses/{}", calendar_id, person_id))
            .await
    }
}
