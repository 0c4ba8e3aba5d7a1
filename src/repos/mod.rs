/*
 * Responsibility
 * - username をキーにしたレコード保存の窓口 (KeyValueStore)
 * - profiles / settings / users の保存形式 (Row) を定義
 * - 実装 (MemoryStore) は差し替え可能、handler/service は trait だけを見る
 */
pub mod error;
pub mod memory;
pub mod profile_repo;
pub mod seed;
pub mod settings_repo;
pub mod store;
pub mod user_repo;

pub use error::RepoError;
pub use memory::MemoryStore;
