use thiserror::Error;
use uuid::Uuid;

/// Failures raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Refusing to store file '{0}' without payload bytes")]
    EmptyPayload(String),

    #[error("Identifier {0} is already in use")]
    DuplicateId(Uuid),
}
