use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::files::dtos::FileResponseDto;
use crate::features::tutorials::dtos::TutorialResponseDto;

/// Full data export document
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocumentDto {
    pub export_date: DateTime<Utc>,
    #[schema(example = "BMW ME9.2 Steuergeräte Platform")]
    pub platform: String,
    #[schema(example = "1.0")]
    pub version: String,
    pub data: ExportDataDto,
    pub statistics: ExportStatisticsDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExportDataDto {
    pub files: Vec<ExportFileDto>,
    pub tutorials: Vec<TutorialResponseDto>,
}

/// File metadata as exported; the storage name is left out
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportFileDto {
    pub id: Uuid,
    pub original_name: String,
    pub file_type: String,
    pub bmw_model: String,
    pub motor: String,
    pub description: Option<String>,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl From<FileResponseDto> for ExportFileDto {
    fn from(f: FileResponseDto) -> Self {
        Self {
            id: f.id,
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

/// Record counts; each breakdown sums to its total
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportStatisticsDto {
    pub total_files: usize,
    pub total_tutorials: usize,
    pub files_by_model: BTreeMap<String, usize>,
    pub tutorials_by_category: BTreeMap<String, usize>,
}
