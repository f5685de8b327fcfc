use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of record identifiers and creation timestamps
pub trait IdentityProvider: Send + Sync {
    fn next_id(&self) -> Uuid;
    fn now(&self) -> DateTime<Utc>;
}

/// Random v4 identifiers and the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl IdentityProvider for SystemIdentity {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
