//! Keyed record store used by the account and auth services.
use async_trait::async_trait;

use crate::repos::error::RepoError;

pub type RepoResult<T> = Result<T, RepoError>;

/// One record per key (the owning username).
///
/// Every call is atomic for its key: a concurrent reader observes either the
/// previous value or the new one, never a partially written record. There are
/// no multi-key transactions.
#[async_trait]
pub trait KeyValueStore<V>: Send + Sync
where
    V: Clone + Send + Sync + 'static,
{
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn get(&self, key: &str) -> RepoResult<Option<V>>;

    // Replace (not merge) the value under `key`, creating it if absent.
    // Returns the stored value.
    async fn put(&self, key: &str, value: V) -> RepoResult<V>;

    // Returns `true` if a value was removed, `false` if the key was absent.
    async fn delete(&self, key: &str) -> RepoResult<bool>;
}
