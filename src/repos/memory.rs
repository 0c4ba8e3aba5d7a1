//! Process-local store backed by a `HashMap`.
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::repos::store::{KeyValueStore, RepoResult};

/// In-memory `KeyValueStore`.
///
/// Each operation holds the lock for the whole read or write, so a dropped
/// request future cannot leave a key half-updated. Nothing survives a restart.
#[derive(Debug)]
pub struct MemoryStore<V> {
    entries: RwLock<HashMap<String, V>>,
}

impl<V> MemoryStore<V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<V> Default for MemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<V> KeyValueStore<V> for MemoryStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> RepoResult<Option<V>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: V) -> RepoResult<V> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.clone());
        Ok(value)
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        Ok(self.entries.write().await.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_for_missing_key() {
        let store: MemoryStore<String> = MemoryStore::new();

        assert_eq!(store.get("johndoe").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_existing_value() {
        let store: MemoryStore<String> = MemoryStore::new();
        store.put("johndoe", "first".to_string()).await.unwrap();

        let stored = store.put("johndoe", "second".to_string()).await.unwrap();

        assert_eq!(stored, "second");
        assert_eq!(store.get("johndoe").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn delete_reports_whether_key_existed() {
        let store: MemoryStore<u32> = MemoryStore::new();
        store.put("johndoe", 1).await.unwrap();

        assert!(store.delete("johndoe").await.unwrap());
        assert!(!store.delete("johndoe").await.unwrap());
        assert_eq!(store.get("johndoe").await.unwrap(), None);
    }

    #[tokio::test]
    async fn keys_are_isolated() {
        let store: MemoryStore<u32> = MemoryStore::new();
        store.put("johndoe", 1).await.unwrap();
        store.put("alice", 2).await.unwrap();

        store.delete("alice").await.unwrap();

        assert_eq!(store.get("johndoe").await.unwrap(), Some(1));
    }
}
