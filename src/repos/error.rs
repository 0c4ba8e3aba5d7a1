/**
 * Responsibility
 * - repo が上位に伝える意味の定義
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    /// Raised by persistent `KeyValueStore` backends (connection, query,
    /// decode). `MemoryStore` cannot fail.
    #[allow(dead_code)]
    #[error("store backend error: {0}")]
    Backend(String),
}
