/*
 * Responsibility
 * - settings の保存形式 (SettingsRow)
 * - username -> SettingsRow の KeyValueStore を共有する型
 * - Row 自体は所有者を持たない (キーが所有者)
 */
use std::sync::Arc;

use crate::repos::store::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub notifications_enabled: bool,
    pub dark_mode: bool,
    pub language: String,
    pub units: String,
}

pub type SharedSettingsStore = Arc<dyn KeyValueStore<SettingsRow>>;
