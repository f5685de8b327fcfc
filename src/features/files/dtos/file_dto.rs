use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::files::models::{File, NewFile};

/// Upload file request DTO for OpenAPI documentation
/// Note: This struct is for Swagger UI documentation only.
/// The actual handler uses axum's Multipart extractor directly.
#[derive(Debug, ToSchema)]
#[schema(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadFileDto {
    /// Calibration file (.xdf, .bin or .a2l)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
    #[schema(example = "E46")]
    pub bmw_model: String,
    #[schema(example = "M54")]
    pub motor: String,
    pub description: Option<String>,
}

/// Fields of a new file record, assembled from the multipart upload
#[derive(Debug, Clone, Validate)]
pub struct CreateFileDto {
    #[validate(length(min = 1, message = "originalName is required"))]
    pub original_name: String,

    #[validate(length(min = 1, message = "fileType is required"))]
    pub file_type: String,

    #[validate(length(min = 1, message = "bmwModel is required"))]
    pub bmw_model: String,

    #[validate(length(min = 1, message = "motor is required"))]
    pub motor: String,

    pub description: Option<String>,

    /// Measured from the received payload
    #[validate(range(min = 1, message = "fileSize must be at least 1 byte"))]
    pub file_size: u64,
}

impl From<CreateFileDto> for NewFile {
    fn from(dto: CreateFileDto) -> Self {
        Self {
            original_name: dto.original_name,
            file_type: dto.file_type,
            bmw_model: dto.bmw_model,
            motor: dto.motor,
            description: dto.description,
        }
    }
}

/// Response DTO for a stored file
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileResponseDto {
    pub id: Uuid,
    /// Storage name (`{id}-{originalName}`)
    pub filename: String,
    pub original_name: String,
    #[schema(example = "bin")]
    pub file_type: String,
    pub bmw_model: String,
    pub motor: String,
    pub description: Option<String>,
    /// Size of the payload in bytes
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<File> for FileResponseDto {
    fn from(f: File) -> Self {
        Self {
            id: f.id,
            filename: f.filename,
            original_name: f.original_name,
            file_type: f.file_type,
            bmw_model: f.bmw_model,
            motor: f.motor,
            description: f.description,
            file_size: f.file_size,
            uploaded_at: f.uploaded_at,
        }
    }
}

/// Query params for listing files
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListFilesQuery {
    /// Only return files for this BMW model (exact match)
    pub model: Option<String>,
}

/// Lowercase extension after the last '.', if the name has one
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}
