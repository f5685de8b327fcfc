use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::tutorials::models::{NewTutorial, Tutorial};

/// Request DTO for adding a tutorial video
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorialDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// YouTube link (`youtube.com/watch?v=...` or `youtu.be/...`)
    #[serde(default)]
    #[validate(length(min = 1, message = "youtubeUrl is required"))]
    #[schema(example = "https://youtu.be/xyz789")]
    pub youtube_url: String,

    /// Free-text category (basic, advanced, troubleshooting, tools)
    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    #[schema(example = "basic")]
    pub category: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateTutorialDto> for NewTutorial {
    fn from(dto: CreateTutorialDto) -> Self {
        Self {
            title: dto.title,
            youtube_url: dto.youtube_url,
            category: dto.category,
            description: dto.description,
        }
    }
}

/// Response DTO for tutorial
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TutorialResponseDto {
    pub id: Uuid,
    pub title: String,
    pub youtube_url: String,
    /// Extracted video id, empty when the URL was not recognized
    pub youtube_id: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Tutorial> for TutorialResponseDto {
    fn from(t: Tutorial) -> Self {
        Self {
            id: t.id,
            title: t.title,
            youtube_url: t.youtube_url,
            youtube_id: t.youtube_id,
            category: t.category,
            description: t.description,
            created_at: t.created_at,
        }
    }
}

/// Query params for listing tutorials
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListTutorialsQuery {
    /// Only return tutorials in this category (exact match)
    pub category: Option<String>,
}
