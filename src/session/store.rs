use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{SessionKey, SessionRecord};
use crate::error::Result;

/// Keyed session storage.
///
/// Handlers never reach storage except through this trait, injected via the
/// application state. Concurrent-write consistency is whatever the backend
/// provides; callers do no extra coordination.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the record stored under `key`, if any.
    async fn load(&self, key: &SessionKey) -> Result<Option<SessionRecord>>;

    /// Store `record` under `key`, replacing any previous record.
    async fn save(&self, key: &SessionKey, record: SessionRecord) -> Result<()>;

    /// Delete the record stored under `key`. Unknown keys are not an error.
    async fn delete(&self, key: &SessionKey) -> Result<()>;

    /// Drop every record.
    async fn clear(&self) -> Result<()>;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}

/// In-memory session store for single-process use.
pub struct MemoryStore {
    records: RwLock<HashMap<SessionKey, SessionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn load(&self, key: &SessionKey) -> Result<Option<SessionRecord>> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned())
    }

    async fn save(&self, key: &SessionKey, record: SessionRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(key.clone(), record);
        Ok(())
    }

    async fn delete(&self, key: &SessionKey) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut records = self.records.write().await;
        records.clear();
        Ok(())
    }

    async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(currency: &str) -> SessionRecord {
        let mut record = SessionRecord::new();
        record.fields.insert("currency".to_string(), currency.to_string());
        record
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();
        let key = SessionKey::generate();
        store.save(&key, sample_record("USD")).await.unwrap();

        let loaded = store.load(&key).await.unwrap().unwrap();
        assert_eq!(loaded.fields.get("currency").unwrap(), "USD");
    }

    #[tokio::test]
    async fn test_load_missing_key() {
        let store = MemoryStore::new();
        let key = SessionKey::generate();
        assert!(store.load(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_record() {
        let store = MemoryStore::new();
        let key = SessionKey::generate();
        store.save(&key, sample_record("USD")).await.unwrap();
        store.save(&key, sample_record("BDT")).await.unwrap();

        let loaded = store.load(&key).await.unwrap().unwrap();
        assert_eq!(loaded.fields.get("currency").unwrap(), "BDT");
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let key = SessionKey::generate();
        store.save(&key, sample_record("USD")).await.unwrap();

        store.delete(&key).await.unwrap();
        assert!(store.load(&key).await.unwrap().is_none());

        // Deleting an already-gone key succeeds
        store.delete(&key).await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_and_count() {
        let store = MemoryStore::new();
        assert_eq!(store.count().await, 0);

        store.save(&SessionKey::generate(), sample_record("a")).await.unwrap();
        store.save(&SessionKey::generate(), sample_record("b")).await.unwrap();
        assert_eq!(store.count().await, 2);

        store.clear().await.unwrap();
        assert_eq!(store.count().await, 0);
    }
}
