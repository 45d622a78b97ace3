//! HTTP client for the Basecamp (BCX) API.
//!
//! Wraps an OAuth access token (see the `basecampx-oauth` crate) and
//! issues authenticated requests against launchpad and the account API.
//! Resources come back as [`serde_json::Value`], exactly as the server
//! sent them.
//!
//! # Example
//!
//! ```no_run
//! use basecampx_client::{BasecampClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let launchpad = BasecampClient::new("access-token", "MyApp (me@example.com)", None)?;
//!
//! // Pick the Basecamp Next account
//! let accounts = launchpad.accounts().await?;
//! let account = accounts
//!     .iter()
//!     .find(|a| a.product == "bcx")
//!     .expect("no bcx account");
//!
//! let client = BasecampClient::new("access-token", "MyApp (me@example.com)", Some(account.id))?;
//! for project in client.projects().list().await?.as_array().into_iter().flatten() {
//!     println!("{}", project["name"]);
//! }
//!
//! // Paginated listings are followed to the end
//! let topics = client.project(42).topics().list().await?;
//! println!("{} topics", topics.len());
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Launchpad**: authorization, accounts
//! - **Projects**: list, create, update, archive, delete, accesses
//! - **Project sections**: topics, messages, comments, todo lists, todos,
//!   documents, uploads, calendar events
//! - **People**, **Events**, **Attachments**, **Calendars**
//! - **Resource**: plain GET on any other path

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{CalendarEventParent, CommentSection};
pub use client::{BasecampClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::*;
