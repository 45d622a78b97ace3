//! Request and response types for the Basecamp API.
//!
//! Only launchpad accounts and write payloads are typed. Resources read
//! from the account API (projects, topics, todos, ...) come back as
//! [`serde_json::Value`] exactly as the server sent them.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Launchpad
// ─────────────────────────────────────────────────────────────────────────────

/// An account the token has access to.
///
/// A person can belong to accounts of several 37signals products; use
/// `product` to pick the right one (`"bcx"` for Basecamp Next).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub product: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Identity of the person who authorized the token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_address: String,
}

/// Body of `authorization.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    pub accounts: Vec<Account>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Projects and accesses
// ─────────────────────────────────────────────────────────────────────────────

/// Create or update a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Grant people access to a project or calendar, by id or by email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessGrant {
    #[serde(default)]
    pub ids: Vec<u64>,
    #[serde(default, rename = "email_addresses")]
    pub emails: Vec<String>,
}

impl AccessGrant {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty() && self.emails.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages, comments, uploads
// ─────────────────────────────────────────────────────────────────────────────

/// Reference to a previously uploaded attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    /// Token returned by the attachments upload endpoint.
    pub token: String,
    pub name: String,
}

/// Post or update a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentRef>,
}

/// Post a comment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<AttachmentRef>,
}

/// Add files to a project's files section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub attachments: Vec<AttachmentRef>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Todos
// ─────────────────────────────────────────────────────────────────────────────

/// Create or update a todo list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

/// Who a todo is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: u64,
    /// `"Person"` or `"Group"`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Create or update a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Due date (ISO 8601 date).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Documents
// ─────────────────────────────────────────────────────────────────────────────

/// Create or update a text document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Calendars
// ─────────────────────────────────────────────────────────────────────────────

/// Create or rename a calendar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarRequest {
    pub name: String,
}

/// Create or update a calendar event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
    /// Start (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<String>,
    /// End (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_deserialize() {
        let body = r#"{
            "expires_at": "2012-03-22T16:56:48-05:00",
            "identity": {"id": 9999999, "first_name": "Jason", "last_name": "Fried",
                         "email_address": "jason@37signals.com"},
            "accounts": [
                {"product": "bcx", "id": 88888888, "name": "Wayne Enterprises, Ltd.",
                 "href": "https://basecamp.com/88888888/api/v1"},
                {"product": "campfire", "id": 44444444, "name": "Wayne Enterprises, Ltd.",
                 "href": "https://wayneenterprises.campfirenow.com"}
            ]
        }"#;

        let auth: Authorization = serde_json::from_str(body).unwrap();
        assert_eq!(auth.accounts.len(), 2);
        assert_eq!(auth.accounts[0].product, "bcx");
        assert_eq!(auth.identity.unwrap().first_name, "Jason");
    }

    #[test]
    fn test_access_grant_wire_names() {
        let grant = AccessGrant {
            ids: vec![5],
            emails: vec!["a@b.c".to_string()],
        };
        let value = serde_json::to_value(&grant).unwrap();
        assert_eq!(value, serde_json::json!({"ids": [5], "email_addresses": ["a@b.c"]}));
        assert!(AccessGrant::default().is_empty());
    }

    #[test]
    fn test_todo_request_skips_unset() {
        let todo = TodoRequest {
            content: Some("Buy milk".to_string()),
            assignee: Some(Assignee {
                id: 7,
                kind: "Person".to_string(),
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"content": "Buy milk", "assignee": {"id": 7, "type": "Person"}})
        );
    }
}
