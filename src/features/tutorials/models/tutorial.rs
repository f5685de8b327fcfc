use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored tutorial video link
#[derive(Debug, Clone, PartialEq)]
pub struct Tutorial {
    pub id: Uuid,
    pub title: String,
    pub youtube_url: String,
    /// Video id extracted from `youtube_url`, empty when the URL is not recognized
    pub youtube_id: String,
    pub category: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTutorial {
    pub title: String,
    pub youtube_url: String,
    pub category: String,
    pub description: Option<String>,
}
