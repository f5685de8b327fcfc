//! Storage module for calibration files and tutorials
//!
//! Defines the storage contract shared by all feature services and the
//! process-memory implementation used by the server. Records and payloads
//! live only as long as the process.

mod error;
mod identity;
mod memory;

use async_trait::async_trait;
use axum::body::Bytes;
use uuid::Uuid;

use crate::features::files::models::{File, NewFile};
use crate::features::tutorials::models::{NewTutorial, Tutorial};

pub use error::StorageError;
pub use identity::{IdentityProvider, SystemIdentity};
pub use memory::MemStorage;

pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Storage contract for file records, their payloads, and tutorials.
///
/// List operations return records newest first. A file record and its
/// payload are created and removed together.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store a new file record together with its payload bytes
    async fn create_file(&self, file: NewFile, payload: Bytes) -> StorageResult<File>;

    async fn list_files(&self) -> StorageResult<Vec<File>>;

    /// Files whose `bmw_model` equals `model` exactly
    async fn list_files_by_model(&self, model: &str) -> StorageResult<Vec<File>>;

    async fn get_file(&self, id: Uuid) -> StorageResult<Option<File>>;

    async fn get_file_content(&self, id: Uuid) -> StorageResult<Option<Bytes>>;

    /// Remove a file record and its payload. Returns whether the record existed.
    async fn delete_file(&self, id: Uuid) -> StorageResult<bool>;

    async fn create_tutorial(&self, tutorial: NewTutorial) -> StorageResult<Tutorial>;

    async fn list_tutorials(&self) -> StorageResult<Vec<Tutorial>>;

    async fn list_tutorials_by_category(&self, category: &str) -> StorageResult<Vec<Tutorial>>;

    async fn delete_tutorial(&self, id: Uuid) -> StorageResult<bool>;
}
