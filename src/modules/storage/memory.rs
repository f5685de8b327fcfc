use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Bytes;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{IdentityProvider, Storage, StorageError, StorageResult, SystemIdentity};
use crate::features::files::models::{File, NewFile};
use crate::features::tutorials::models::{NewTutorial, Tutorial};
use crate::shared::validation::{extract_youtube_id, non_empty};

/// File records and their payloads, keyed by the same id.
///
/// Both maps always hold the same key set; they are only mutated together
/// while the write lock is held.
#[derive(Default)]
struct FileTable {
    records: HashMap<Uuid, File>,
    payloads: HashMap<Uuid, Bytes>,
}

/// Process-memory storage backend
pub struct MemStorage {
    files: RwLock<FileTable>,
    tutorials: RwLock<HashMap<Uuid, Tutorial>>,
    identity: Arc<dyn IdentityProvider>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_identity(Arc::new(SystemIdentity))
    }

    pub fn with_identity(identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            files: RwLock::new(FileTable::default()),
            tutorials: RwLock::new(HashMap::new()),
            identity,
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn newest_files_first(mut files: Vec<File>) -> Vec<File> {
    files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
    files
}

fn newest_tutorials_first(mut tutorials: Vec<Tutorial>) -> Vec<Tutorial> {
    tutorials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tutorials
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_file(&self, file: NewFile, payload: Bytes) -> StorageResult<File> {
        if payload.is_empty() {
            return Err(StorageError::EmptyPayload(file.original_name));
        }

        let mut table = self.files.write().await;

        let id = self.identity.next_id();
        if table.records.contains_key(&id) {
            return Err(StorageError::DuplicateId(id));
        }

        let record = File {
            id,
            filename: format!("{}-{}", id, file.original_name),
            original_name: file.original_name,
            file_type: file.file_type,
            bmw_model: file.bmw_model,
            motor: file.motor,
            description: non_empty(file.description),
            file_size: payload.len() as u64,
            uploaded_at: self.identity.now(),
        };

        table.payloads.insert(id, payload);
        table.records.insert(id, record.clone());

        debug!(
            "Stored file: id={}, filename={}, size={}",
            record.id, record.filename, record.file_size
        );

        Ok(record)
    }

    async fn list_files(&self) -> StorageResult<Vec<File>> {
        let table = self.files.read().await;
        Ok(newest_files_first(table.records.values().cloned().collect()))
    }

    async fn list_files_by_model(&self, model: &str) -> StorageResult<Vec<File>> {
        let table = self.files.read().await;
        let matching = table
            .records
            .values()
            .filter(|f| f.bmw_model == model)
            .cloned()
            .collect();
        Ok(newest_files_first(matching))
    }

    async fn get_file(&self, id: Uuid) -> StorageResult<Option<File>> {
        Ok(self.files.read().await.records.get(&id).cloned())
    }

    async fn get_file_content(&self, id: Uuid) -> StorageResult<Option<Bytes>> {
        // Bytes clones share the underlying buffer
        Ok(self.files.read().await.payloads.get(&id).cloned())
    }

    async fn delete_file(&self, id: Uuid) -> StorageResult<bool> {
        let mut table = self.files.write().await;
        let existed = table.records.remove(&id).is_some();
        table.payloads.remove(&id);

        if existed {
            debug!("Removed file and payload: id={}", id);
        }

        Ok(existed)
    }

    async fn create_tutorial(&self, tutorial: NewTutorial) -> StorageResult<Tutorial> {
        let mut tutorials = self.tutorials.write().await;

        let id = self.identity.next_id();
        if tutorials.contains_key(&id) {
            return Err(StorageError::DuplicateId(id));
        }

        let record = Tutorial {
            id,
            youtube_id: extract_youtube_id(&tutorial.youtube_url),
            title: tutorial.title,
            youtube_url: tutorial.youtube_url,
            category: tutorial.category,
            description: non_empty(tutorial.description),
            created_at: self.identity.now(),
        };

        tutorials.insert(id, record.clone());

        debug!(
            "Stored tutorial: id={}, youtube_id={:?}",
            record.id, record.youtube_id
        );

        Ok(record)
    }

    async fn list_tutorials(&self) -> StorageResult<Vec<Tutorial>> {
        let tutorials = self.tutorials.read().await;
        Ok(newest_tutorials_first(tutorials.values().cloned().collect()))
    }

    async fn list_tutorials_by_category(&self, category: &str) -> StorageResult<Vec<Tutorial>> {
        let tutorials = self.tutorials.read().await;
        let matching = tutorials
            .values()
            .filter(|t| t.category == category)
            .cloned()
            .collect();
        Ok(newest_tutorials_first(matching))
    }

    async fn delete_tutorial(&self, id: Uuid) -> StorageResult<bool> {
        Ok(self.tutorials.write().await.remove(&id).is_some())
    }
}
