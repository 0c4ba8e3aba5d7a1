use serde::{Deserialize, Serialize};

use crate::repos::settings_repo::SettingsRow;

/// Settings carry no owner field; the authenticated username is the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsBody {
    pub notifications_enabled: bool,
    pub dark_mode: bool,
    pub language: String,
    pub units: String,
}

impl From<SettingsBody> for SettingsRow {
    fn from(b: SettingsBody) -> Self {
        SettingsRow {
            notifications_enabled: b.notifications_enabled,
            dark_mode: b.dark_mode,
            language: b.language,
            units: b.units,
        }
    }
}

impl From<SettingsRow> for SettingsBody {
    fn from(r: SettingsRow) -> Self {
        SettingsBody {
            notifications_enabled: r.notifications_enabled,
            dark_mode: r.dark_mode,
            language: r.language,
            units: r.units,
        }
    }
}
