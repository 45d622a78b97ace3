//! Attachments API.

use std::path::Path;

use serde_json::Value;

use crate::client::BasecampClient;
use crate::error::Result;

/// Content type used when nothing better is known.
const FALLBACK_CONTENT_TYPE: &str = "text/plain";

/// Attachments API client.
pub struct AttachmentsApi {
    client: BasecampClient,
}

impl AttachmentsApi {
    pub(crate) fn new(client: BasecampClient) -> Self {
        Self { client }
    }

    /// Every attachment in a project, following pagination.
    pub async fn list(&self, project_id: u64) -> Result<Vec<Value>> {
        self.client
            .get_all_pages(&format!("projects/{}/attachments", project_id), &[])
            .await
    }

    /// Upload raw file content.
    ///
    /// Returns the server's reply, whose `token` is what messages, comments
    /// and uploads reference.
    pub async fn upload(&self, content: Vec<u8>, content_type: &str) -> Result<Value> {
        self.client
            .post_bytes("attachments", content, content_type)
            .await
    }

    /// Upload a local file, guessing its content type from the extension.
    pub async fn upload_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let path = path.as_ref();
        let content = tokio::fs::read(path).await?;
        self.upload(content, guess_content_type(path)).await
    }
}

/// Content type for a file name, by extension.
pub(crate) fn guess_content_type(path: &Path) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(guess_content_type(Path::new("logo.PNG")), "image/png");
        assert_eq!(guess_content_type(Path::new("a/b/report.pdf")), "application/pdf");
        assert_eq!(guess_content_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(guess_content_type(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(guess_content_type(Path::new("Makefile")), "text/plain");
    }
}
