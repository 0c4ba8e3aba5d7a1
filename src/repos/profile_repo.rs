/*
 * Responsibility
 * - profiles の保存形式 (ProfileRow)
 * - username -> ProfileRow の KeyValueStore を共有する型
 */
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::repos::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_info: Map<String, Value>,
    pub preferences: Map<String, Value>,
}

pub type SharedProfileStore = Arc<dyn KeyValueStore<ProfileRow>>;
