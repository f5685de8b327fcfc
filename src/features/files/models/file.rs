use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Stored metadata for an uploaded calibration file
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    pub id: Uuid,
    /// Storage name, always `{id}-{original_name}`
    pub filename: String,
    pub original_name: String,
    /// Lowercase extension without the leading dot
    pub file_type: String,
    pub bmw_model: String,
    pub motor: String,
    pub description: Option<String>,
    /// Byte length of the stored payload
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new file record.
///
/// Identity, storage name, size and timestamp are assigned by the storage layer.
#[derive(Debug, Clone)]
pub struct NewFile {
    pub original_name: String,
    pub file_type: String,
    pub bmw_model: String,
    pub motor: String,
    pub description: Option<String>,
}
