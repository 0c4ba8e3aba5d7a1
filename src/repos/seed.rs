//! Demo data for local development.
//!
//! Seeds one active account (`johndoe`) with a profile and settings, and one
//! disabled account (`alice`) without records. Both share the configured demo
//! password hash.
use serde_json::{Map, Value, json};

use crate::repos::{
    profile_repo::ProfileRow,
    settings_repo::SettingsRow,
    store::{KeyValueStore, RepoResult},
    user_repo::UserRow,
};

pub const DEMO_ACTIVE_USER: &str = "johndoe";
pub const DEMO_DISABLED_USER: &str = "alice";

pub fn demo_profile() -> ProfileRow {
    ProfileRow {
        username: DEMO_ACTIVE_USER.to_string(),
        full_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "+91 9876543210".to_string(),
        vehicle_info: object([
            ("make", json!("Toyota")),
            ("model", json!("Camry")),
            ("year", json!(2022)),
            ("license_plate", json!("KA01AB1234")),
        ]),
        preferences: object([
            ("notification_frequency", json!("daily")),
            ("report_format", json!("detailed")),
        ]),
    }
}

pub fn demo_settings() -> SettingsRow {
    SettingsRow {
        notifications_enabled: true,
        dark_mode: true,
        language: "en".to_string(),
        units: "metric".to_string(),
    }
}

pub async fn seed_demo_data(
    profiles: &dyn KeyValueStore<ProfileRow>,
    settings: &dyn KeyValueStore<SettingsRow>,
    users: &dyn KeyValueStore<UserRow>,
    password_hash: &str,
) -> RepoResult<()> {
    users
        .put(
            DEMO_ACTIVE_USER,
            UserRow {
                username: DEMO_ACTIVE_USER.to_string(),
                full_name: Some("John Doe".to_string()),
                email: Some("john@example.com".to_string()),
                hashed_password: password_hash.to_string(),
                disabled: false,
            },
        )
        .await?;
    users
        .put(
            DEMO_DISABLED_USER,
            UserRow {
                username: DEMO_DISABLED_USER.to_string(),
                full_name: Some("Alice Wonderson".to_string()),
                email: Some("alice@example.com".to_string()),
                hashed_password: password_hash.to_string(),
                disabled: true,
            },
        )
        .await?;

    profiles.put(DEMO_ACTIVE_USER, demo_profile()).await?;
    settings.put(DEMO_ACTIVE_USER, demo_settings()).await?;

    Ok(())
}

fn object<const N: usize>(pairs: [(&str, Value); N]) -> Map<String, Value> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
