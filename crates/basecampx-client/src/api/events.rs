//! Events (activity feed) API.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::client::BasecampClient;
use crate::error::Result;

/// Events API client.
pub struct EventsApi {
    client: BasecampClient,
}

impl EventsApi {
    pub(crate) fn new(client: BasecampClient) -> Self {
        Self { client }
    }

    /// Every event visible to the user, newest first. With `since`, only
    /// events after that instant.
    pub async fn list(&self, since: Option<DateTime<Utc>>) -> Result<Vec<Value>> {
        self.client
            .get_all_pages("events", &since_params(since))
            .await
    }

    /// Events of a single project.
    pub async fn list_for_project(
        &self,
        project_id: u64,
        since: Option<DateTime<Utc>>,
    ) -> Result<Vec<Value>> {
        self.client
            .get_all_pages(
                &format!("projects/{}/events", project_id),
                &since_params(since),
            )
            .await
    }
}

fn since_params(since: Option<DateTime<Utc>>) -> Vec<(&'static str, String)> {
    since
        .map(|t| ("since", t.to_rfc3339_opts(SecondsFormat::Secs, false)))
        .into_iter()
        .collect()
}
