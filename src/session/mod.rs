//! Session domain: opaque keys, server-side records, and the in-request
//! session handle.
//!
//! Storage is reached only through the [`SessionStore`] trait so the
//! backend can be swapped without touching handlers. The handle tracks a
//! `modified` flag; unmodified sessions are never persisted, and a session
//! has no key until its first save.

pub mod cookie;
pub mod store;

pub use store::{MemoryStore, SessionStore};

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// Opaque session identifier.
///
/// Generated server-side, transmitted to the client in a cookie, never
/// interpreted. The string form is exposed read-only for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionKey(String);

impl SessionKey {
    /// Mint a fresh key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Server-side state stored per session key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The session mapping. Handlers in this crate only touch the
    /// `currency`, `language`, and `timezone` entries, but the record is a
    /// generic string mapping.
    pub fields: HashMap<String, String>,

    /// When the session was first persisted.
    pub created_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            created_at: Utc::now(),
        }
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// In-request view over a session record.
///
/// Lifecycle: {no-session} → (first write) → {session-exists} → (flush) →
/// {no-session}. A handle starts keyless; [`Session::save`] mints the key
/// on first persist.
#[derive(Debug)]
pub struct Session {
    key: Option<SessionKey>,
    record: SessionRecord,
    modified: bool,
}

impl Session {
    /// A session that does not exist yet.
    pub fn empty() -> Self {
        Self {
            key: None,
            record: SessionRecord::new(),
            modified: false,
        }
    }

    /// Load the session named by `key`, if any.
    ///
    /// A cookie naming a key the store no longer knows (expired, flushed)
    /// yields an empty keyless session; the stale key is never adopted.
    pub async fn load(store: &dyn SessionStore, key: Option<SessionKey>) -> Result<Self> {
        let Some(key) = key else {
            return Ok(Self::empty());
        };
        match store.load(&key).await? {
            Some(record) => Ok(Self {
                key: Some(key),
                record,
                modified: false,
            }),
            None => Ok(Self::empty()),
        }
    }

    /// The key this session is stored under, if it has been persisted.
    pub fn key(&self) -> Option<&SessionKey> {
        self.key.as_ref()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.record.fields.get(field).map(String::as_str)
    }

    /// Assign a field and mark the session modified.
    pub fn insert(&mut self, field: &str, value: &str) {
        self.record.fields.insert(field.to_string(), value.to_string());
        self.modified = true;
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Persist the session if it was modified, minting a key on first save.
    /// Unmodified sessions are left untouched and keyless sessions stay
    /// keyless.
    pub async fn save(&mut self, store: &dyn SessionStore) -> Result<()> {
        if !self.modified {
            return Ok(());
        }
        let key = match &self.key {
            Some(key) => key.clone(),
            None => {
                let key = SessionKey::generate();
                self.key = Some(key.clone());
                key
            }
        };
        store.save(&key, self.record.clone()).await?;
        self.modified = false;
        Ok(())
    }

    /// Destroy the session: delete the record and invalidate the key.
    pub async fn flush(self, store: &dyn SessionStore) -> Result<()> {
        if let Some(key) = self.key {
            store.delete(&key).await?;
        }
        Ok(())
    }
}
