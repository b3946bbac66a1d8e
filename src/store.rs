//! Progress persistence over a key-value store contract.
//!
//! One JSON record per profile. Loading is self-healing: a missing or
//! corrupt record falls back to defaults and never surfaces an error.
//! Saving is a full overwrite on every commit.

use crate::types::{Progress, ProgressRecord};

/// Key under which the record is stored.
pub const PROGRESS_STORAGE_KEY: &str = "plotviewProgress";

/// Persistence contract for player progress.
pub trait ProgressStore {
    /// Restore progress; defaults on a missing or corrupt record.
    fn load(&self) -> Progress;
    /// Overwrite the persisted record. Failures are swallowed — losing one
    /// write is preferable to interrupting input handling.
    fn save(&mut self, progress: &Progress);
}

/// Decode a persisted record, discarding corrupt data.
pub fn decode(json: &str) -> Progress {
    serde_json::from_str::<ProgressRecord>(json)
        .map(Progress::from)
        .unwrap_or_default()
}

/// Encode progress as the wire record.
pub fn encode(progress: &Progress) -> Option<String> {
    serde_json::to_string(&ProgressRecord::from(progress)).ok()
}

/// In-memory store for native use and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Option<String>,
}

impl MemoryStore {
    /// Empty store (first load yields defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw record, valid or not.
    pub fn with_record(record: impl Into<String>) -> Self {
        Self {
            record: Some(record.into()),
        }
    }

    /// The raw persisted record, if any.
    pub fn raw(&self) -> Option<&str> {
        self.record.as_deref()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Progress {
        self.record.as_deref().map(decode).unwrap_or_default()
    }

    fn save(&mut self, progress: &Progress) {
        if let Some(json) = encode(progress) {
            self.record = Some(json);
        }
    }
}

/// Browser localStorage-backed store.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStorageStore {
    fn load(&self) -> Progress {
        Self::storage()
            .and_then(|s| s.get_item(PROGRESS_STORAGE_KEY).ok().flatten())
            .map(|json| decode(&json))
            .unwrap_or_default()
    }

    fn save(&mut self, progress: &Progress) {
        if let (Some(storage), Some(json)) = (Self::storage(), encode(progress)) {
            let _ = storage.set_item(PROGRESS_STORAGE_KEY, &json);
        }
    }
}
