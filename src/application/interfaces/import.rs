use crate::error::AppError;
use crate::model::requests::UploadRequest;
use crate::model::responses::UploadResponse;
use async_trait::async_trait;
use std::path::Path;

/// Interface for multipart file uploads
#[async_trait]
pub trait ImportService: Send + Sync {
    /// Uploads a file to an arbitrary upload endpoint
    ///
    /// All file uploads of the API are multipart form posts, so any endpoint
    /// accepting an `attachment` part can be targeted.
    async fn upload_file(
        &self,
        path: &str,
        upload: UploadRequest,
    ) -> Result<UploadResponse, AppError>;

    /// Submits a people import sheet to `api/people/import`
    async fn import_people(&self, upload: UploadRequest) -> Result<UploadResponse, AppError>;

    /// Reads `file` and submits it as a people import
    ///
    /// The configured notify address is attached when present.
    async fn import_people_from_path(&self, file: &Path) -> Result<UploadResponse, AppError>;
}
