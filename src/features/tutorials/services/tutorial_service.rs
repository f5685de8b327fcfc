use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::tutorials::dtos::{CreateTutorialDto, TutorialResponseDto};
use crate::modules::storage::Storage;

/// Service for tutorial video links
pub struct TutorialService {
    storage: Arc<dyn Storage>,
}

impl TutorialService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Store a tutorial; the YouTube id is derived from the URL
    pub async fn create(&self, dto: CreateTutorialDto) -> Result<TutorialResponseDto> {
        let tutorial = self.storage.create_tutorial(dto.into()).await?;

        if tutorial.youtube_id.is_empty() {
            tracing::warn!(
                "Tutorial {} has no recognizable YouTube id: {}",
                tutorial.id,
                tutorial.youtube_url
            );
        }

        tracing::info!(
            "Tutorial created: id={}, category={}",
            tutorial.id,
            tutorial.category
        );

        Ok(tutorial.into())
    }

    /// List tutorials newest first, optionally restricted to one category
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<TutorialResponseDto>> {
        let tutorials = match category {
            Some(category) => self.storage.list_tutorials_by_category(category).await?,
            None => self.storage.list_tutorials().await?,
        };

        Ok(tutorials.into_iter().map(Into::into).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.storage.delete_tutorial(id).await? {
            return Err(AppError::NotFound("Tutorial not found".to_string()));
        }

        tracing::info!("Tutorial deleted: id={}", id);
        Ok(())
    }
}
