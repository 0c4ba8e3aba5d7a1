/*
 * Responsibility
 * - Profile の request/response DTO (PUT body と GET response は同じ形)
 * - Row との相互変換
 */
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::repos::profile_repo::ProfileRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileBody {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub vehicle_info: Map<String, Value>,
    pub preferences: Map<String, Value>,
}

impl From<ProfileBody> for ProfileRow {
    fn from(b: ProfileBody) -> Self {
        ProfileRow {
            username: b.username,
            full_name: b.full_name,
            email: b.email,
            phone: b.phone,
            vehicle_info: b.vehicle_info,
            preferences: b.preferences,
        }
    }
}

impl From<ProfileRow> for ProfileBody {
    fn from(r: ProfileRow) -> Self {
        ProfileBody {
            username: r.username,
            full_name: r.full_name,
            email: r.email,
            phone: r.phone,
            vehicle_info: r.vehicle_info,
            preferences: r.preferences,
        }
    }
}
