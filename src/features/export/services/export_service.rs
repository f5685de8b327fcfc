use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::core::config::ExportConfig;
use crate::core::error::Result;
use crate::features::export::dtos::{ExportDataDto, ExportDocumentDto, ExportStatisticsDto};
use crate::features::files::dtos::FileResponseDto;
use crate::features::tutorials::dtos::TutorialResponseDto;
use crate::modules::storage::Storage;

/// Service assembling the JSON export of all stored data
pub struct ExportService {
    storage: Arc<dyn Storage>,
    config: ExportConfig,
}

impl ExportService {
    pub fn new(storage: Arc<dyn Storage>, config: ExportConfig) -> Self {
        Self { storage, config }
    }

    /// Suggested download filename for the export document
    pub fn filename(&self) -> &str {
        &self.config.filename
    }

    /// Snapshot every file record and tutorial, newest first
    pub async fn build(&self) -> Result<ExportDocumentDto> {
        let files: Vec<FileResponseDto> = self
            .storage
            .list_files()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();
        let tutorials: Vec<TutorialResponseDto> = self
            .storage
            .list_tutorials()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let statistics = ExportStatisticsDto {
            total_files: files.len(),
            total_tutorials: tutorials.len(),
            files_by_model: count_by(files.iter().map(|f| f.bmw_model.as_str())),
            tutorials_by_category: count_by(tutorials.iter().map(|t| t.category.as_str())),
        };

        tracing::info!(
            "Export assembled: files={}, tutorials={}",
            statistics.total_files,
            statistics.total_tutorials
        );

        Ok(ExportDocumentDto {
            export_date: Utc::now(),
            platform: self.config.platform.clone(),
            version: self.config.version.clone(),
            data: ExportDataDto {
                files: files.into_iter().map(Into::into).collect(),
                tutorials,
            },
            statistics,
        })
    }
}

fn count_by<'a>(keys: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{new_file, new_tutorial, test_storage};
    use axum::body::Bytes;

    #[test]
    fn test_count_by() {
        let counts = count_by(["E46", "E90", "E46"].into_iter());
        assert_eq!(counts.get("E46"), Some(&2));
        assert_eq!(counts.get("E90"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_export() {
        let service = ExportService::new(test_storage(), ExportConfig::default());
        let document = service.build().await.unwrap();

        assert_eq!(document.platform, "BMW ME9.2 Steuergeräte Platform");
        assert_eq!(document.version, "1.0");
        assert_eq!(document.statistics.total_files, 0);
        assert!(document.statistics.files_by_model.is_empty());
        assert!(document.data.tutorials.is_empty());
    }

    #[tokio::test]
    async fn test_statistics_sum_to_totals() {
        let storage = test_storage();
        for (name, model) in [
            ("a.bin", "E46"),
            ("b.xdf", "E90"),
            ("c.a2l", "E46"),
            ("d.bin", "E60"),
        ] {
            storage
                .create_file(new_file(name, model, "N52"), Bytes::from_static(b"x"))
                .await
                .unwrap();
        }
        for category in ["basic", "tools", "basic"] {
            storage
                .create_tutorial(new_tutorial("https://youtu.be/vid", category))
                .await
                .unwrap();
        }

        let service = ExportService::new(storage, ExportConfig::default());
        let document = service.build().await.unwrap();
        let stats = &document.statistics;

        assert_eq!(stats.total_files, 4);
        assert_eq!(stats.total_tutorials, 3);
        assert_eq!(stats.files_by_model.values().sum::<usize>(), stats.total_files);
        assert_eq!(
            stats.tutorials_by_category.values().sum::<usize>(),
            stats.total_tutorials
        );
        assert_eq!(stats.files_by_model["E46"], 2);
        assert_eq!(stats.tutorials_by_category["basic"], 2);
        assert_eq!(document.data.files.len(), 4);
        assert_eq!(document.data.files[0].original_name, "d.bin");
    }
}
