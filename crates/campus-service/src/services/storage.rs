//! Member photo storage on the local filesystem
//!
//! Photos live under the static directory so the static file service can
//! hand them back. A second upload for the same display name and extension
//! overwrites the first.

use std::path::PathBuf;

use campus_common::{AppError, StorageConfig};
use campus_core::value_objects::member_photo_file_name;
use tracing::{debug, instrument};

use crate::dto::PhotoUpload;

use super::error::ServiceResult;

/// Writes uploaded member photos and returns their public URL
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    config: StorageConfig,
}

impl PhotoStorage {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Directory photos are written to
    pub fn member_dir(&self) -> PathBuf {
        self.config.member_upload_dir()
    }

    /// Save a member photo and return the URL to store with the member
    #[instrument(skip(self, upload), fields(file_name = %upload.file_name, size = upload.bytes.len()))]
    pub async fn save_member_photo(
        &self,
        display_name: &str,
        upload: &PhotoUpload,
    ) -> ServiceResult<String> {
        let file_name = member_photo_file_name(display_name, &upload.file_name);
        let dir = self.member_dir();

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::Storage(format!("create {}: {e}", dir.display())))?;

        let path = dir.join(&file_name);
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| AppError::Storage(format!("write {}: {e}", path.display())))?;

        debug!(path = %path.display(), "Member photo written");
        Ok(self.config.member_photo_url(&file_name))
    }
}
