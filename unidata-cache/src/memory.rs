//! In-memory TTL cache store.
//!
//! Stand-in for Redis in tests and `--no-cache` development runs. Entries
//! carry their own deadline; an expired entry reads back as absent, same
//! as a key Redis has already dropped.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;

use unidata_core::error::Result;
use unidata_core::traits::CacheStore;

/// Entry with its insertion time and TTL.
#[derive(Clone)]
struct Entry {
    value: String,
    inserted_at: Instant,
    ttl: Duration,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// In-memory cache store.
///
/// Thread-safe; keys are used verbatim, matching the store contract.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a single entry.
    pub fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Returns the number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read();
        Ok(entries.get(key).and_then(|e| {
            if e.is_expired() {
                None
            } else {
                Some(e.value.clone())
            }
        }))
    }

    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        self.entries.write().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                inserted_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_get() {
        let store = MemoryStore::new();
        store.set_ex("Turkey", "[1,2,3]", TTL).await.unwrap();
        assert_eq!(store.get("Turkey").await.unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[tokio::test]
    async fn test_miss() {
        let store = MemoryStore::new();
        assert!(store.get("nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_keys_are_verbatim() {
        // No trimming or case folding: "Turkey" and "turkey" are distinct.
        let store = MemoryStore::new();
        store.set_ex("Turkey", "[]", TTL).await.unwrap();
        assert!(store.get("turkey").await.unwrap().is_none());
        assert!(store.get(" Turkey").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let store = MemoryStore::new();
        store
            .set_ex("Turkey", "[]", Duration::from_millis(1))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(store.get("Turkey").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_resets_value_and_ttl() {
        let store = MemoryStore::new();
        store
            .set_ex("Turkey", "old", Duration::from_millis(1))
            .await
            .unwrap();
        store.set_ex("Turkey", "new", TTL).await.unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.get("Turkey").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = MemoryStore::new();
        store.set_ex("a", "1", TTL).await.unwrap();
        store.set_ex("b", "2", TTL).await.unwrap();
        assert_eq!(store.len(), 2);

        store.remove("a");
        assert!(store.get("a").await.unwrap().is_none());

        store.clear();
        assert!(store.is_empty());
    }
}
