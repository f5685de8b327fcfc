use axum::body::Bytes;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use crate::core::config::UploadConfig;
use crate::core::error::{AppError, Result};
use crate::features::files::dtos::{file_extension, CreateFileDto, FileResponseDto};
use crate::features::files::models::File;
use crate::modules::storage::Storage;

/// Service for calibration file operations
pub struct FileService {
    storage: Arc<dyn Storage>,
    upload: UploadConfig,
}

impl FileService {
    pub fn new(storage: Arc<dyn Storage>, upload: UploadConfig) -> Self {
        Self { storage, upload }
    }

    pub fn max_file_size(&self) -> usize {
        self.upload.max_file_size
    }

    /// Check an uploaded file name against the allowed extensions
    ///
    /// # Returns
    /// The lowercase extension, used as the record's `file_type`
    pub fn check_file_name(&self, file_name: &str) -> Result<String> {
        match file_extension(file_name) {
            Some(ext) if self.upload.allowed_extensions.contains(&ext) => Ok(ext),
            _ => Err(AppError::BadRequest(format!(
                "Invalid file type. Allowed types: {}",
                self.upload
                    .allowed_extensions
                    .iter()
                    .map(|e| format!(".{}", e))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    /// Reject payloads above the configured limit
    pub fn check_size(&self, size: usize) -> Result<()> {
        if size > self.upload.max_file_size {
            return Err(AppError::BadRequest(format!(
                "File too large. Maximum size is {} bytes ({} MB)",
                self.upload.max_file_size,
                self.upload.max_file_size / 1024 / 1024
            )));
        }
        Ok(())
    }

    /// Validate and store an uploaded file
    ///
    /// # Arguments
    /// * `dto` - Metadata assembled from the multipart form
    /// * `payload` - The file content
    pub async fn upload(&self, dto: CreateFileDto, payload: Bytes) -> Result<FileResponseDto> {
        dto.validate()?;
        self.check_size(payload.len())?;

        let file = self.storage.create_file(dto.into(), payload).await?;

        info!(
            "File stored: id={}, name={}, model={}, motor={}, size={}",
            file.id, file.original_name, file.bmw_model, file.motor, file.file_size
        );

        Ok(file.into())
    }

    /// List files newest first, optionally restricted to one BMW model
    pub async fn list(&self, model: Option<&str>) -> Result<Vec<FileResponseDto>> {
        let files = match model {
            Some(model) => self.storage.list_files_by_model(model).await?,
            None => self.storage.list_files().await?,
        };

        debug!("Listing {} files (model filter: {:?})", files.len(), model);

        Ok(files.into_iter().map(Into::into).collect())
    }

    /// Fetch a file record together with its payload
    pub async fn download(&self, id: Uuid) -> Result<(File, Bytes)> {
        let file = self
            .storage
            .get_file(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File not found".to_string()))?;

        let content = self
            .storage
            .get_file_content(id)
            .await?
            .ok_or_else(|| AppError::NotFound("File content not found".to_string()))?;

        Ok((file, content))
    }

    /// Delete a file and its payload
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.storage.delete_file(id).await? {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        info!("File deleted: id={}", id);
        Ok(())
    }
}
