use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::{faker::lorem::en::Sentence, Fake};
use uuid::Uuid;

use crate::core::config::{ExportConfig, UploadConfig};
use crate::features::files::models::NewFile;
use crate::features::tutorials::models::NewTutorial;
use crate::modules::storage::{IdentityProvider, MemStorage, Storage};

/// Fixed instant offset by `secs` seconds, for scripting creation times
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::seconds(secs)
}

/// Deterministic identity provider.
///
/// Hands out scripted ids and timestamps first, then falls back to
/// sequential ids and one-second clock steps.
pub struct ScriptedIdentity {
    ids: Mutex<VecDeque<Uuid>>,
    times: Mutex<VecDeque<DateTime<Utc>>>,
    counter: AtomicU64,
    ticks: AtomicU64,
}

impl ScriptedIdentity {
    pub fn new() -> Self {
        Self {
            ids: Mutex::new(VecDeque::new()),
            times: Mutex::new(VecDeque::new()),
            counter: AtomicU64::new(1),
            ticks: AtomicU64::new(0),
        }
    }

    pub fn with_ids(self, ids: Vec<Uuid>) -> Self {
        *self.ids.lock().unwrap() = ids.into();
        self
    }

    pub fn with_times(self, times: Vec<DateTime<Utc>>) -> Self {
        *self.times.lock().unwrap() = times.into();
        self
    }
}

impl IdentityProvider for ScriptedIdentity {
    fn next_id(&self) -> Uuid {
        self.ids
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Uuid::from_u128(self.counter.fetch_add(1, Ordering::SeqCst) as u128))
    }

    fn now(&self) -> DateTime<Utc> {
        self.times
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| at(self.ticks.fetch_add(1, Ordering::SeqCst) as i64))
    }
}

pub fn new_file(original_name: &str, bmw_model: &str, motor: &str) -> NewFile {
    let file_type = original_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    NewFile {
        original_name: original_name.to_string(),
        file_type,
        bmw_model: bmw_model.to_string(),
        motor: motor.to_string(),
        description: Some(Sentence(3..8).fake()),
    }
}

pub fn new_tutorial(youtube_url: &str, category: &str) -> NewTutorial {
    NewTutorial {
        title: Sentence(2..5).fake(),
        youtube_url: youtube_url.to_string(),
        category: category.to_string(),
        description: None,
    }
}

pub fn test_storage() -> Arc<dyn Storage> {
    Arc::new(MemStorage::with_identity(Arc::new(ScriptedIdentity::new())))
}

/// Router wired like production, backed by a fresh in-memory store
pub fn test_server_with(storage: Arc<dyn Storage>, upload: UploadConfig) -> axum_test::TestServer {
    let app = crate::core::router::build_router(storage, upload, ExportConfig::default());
    axum_test::TestServer::new(app).unwrap()
}

pub fn test_server() -> axum_test::TestServer {
    test_server_with(test_storage(), UploadConfig::default())
}
