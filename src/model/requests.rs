/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use std::path::Path;

/// A file to be posted as a multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// File name sent with the `attachment` part
    pub file_name: String,
    /// Raw file content
    pub content: Vec<u8>,
    /// Address notified once the server side job completes
    pub notify_email: Option<String>,
}

impl UploadRequest {
    /// Creates an upload from in-memory content
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
            notify_email: None,
        }
    }

    /// Sets the notification address; blank values are ignored
    #[must_use]
    pub fn with_notify_email(mut self, notify_email: Option<String>) -> Self {
        self.notify_email = notify_email
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        self
    }

    /// Reads `path` and builds an upload named after its last path component
    ///
    /// # Errors
    /// * `AppError::InvalidInput` - if the path has no file name
    /// * `AppError::Io` - if the file cannot be read
    pub async fn from_path(
        path: impl AsRef<Path>,
        notify_email: Option<String>,
    ) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("path has no file name: {}", path.display()))
            })?
            .to_string();

        let content = tokio::fs::read(path).await?;

        Ok(Self::new(file_name, content).with_notify_email(notify_email))
    }
}
