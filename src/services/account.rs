//! Profile / settings / account operations for an already-authenticated caller.
//!
//! Every operation takes the identity resolved by the active-user gate and keys
//! the store with *that* username. Nothing in a request body decides whose
//! records are read or written.
use thiserror::Error;

use crate::repos::{
    RepoError,
    profile_repo::{ProfileRow, SharedProfileStore},
    settings_repo::{SettingsRow, SharedSettingsStore},
};
use crate::services::auth::UserIdentity;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("not authorized to update this profile")]
    Forbidden,

    #[error(transparent)]
    Store(#[from] RepoError),
}

/// What `delete_account` actually removed. Callers get the same confirmation
/// either way; this is for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountDeletion {
    pub profile_removed: bool,
    pub settings_removed: bool,
}

/// A profile may only be written by its owner.
pub fn authorize_profile_write(
    identity: &UserIdentity,
    candidate: &ProfileRow,
) -> Result<(), AccountError> {
    if candidate.username == identity.username {
        Ok(())
    } else {
        Err(AccountError::Forbidden)
    }
}

#[derive(Clone)]
pub struct AccountService {
    profiles: SharedProfileStore,
    settings: SharedSettingsStore,
}

impl std::fmt::Debug for AccountService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountService")
            .field("profiles", &self.profiles.backend_name())
            .field("settings", &self.settings.backend_name())
            .finish()
    }
}

impl AccountService {
    pub fn new(profiles: SharedProfileStore, settings: SharedSettingsStore) -> Self {
        Self { profiles, settings }
    }

    pub async fn get_profile(&self, identity: &UserIdentity) -> Result<ProfileRow, AccountError> {
        self.profiles
            .get(&identity.username)
            .await?
            .ok_or(AccountError::NotFound("User profile"))
    }

    /// Replace the caller's profile wholesale (create if absent).
    pub async fn update_profile(
        &self,
        identity: &UserIdentity,
        candidate: ProfileRow,
    ) -> Result<ProfileRow, AccountError> {
        if let Err(err) = authorize_profile_write(identity, &candidate) {
            tracing::warn!(
                username = %identity.username,
                target = %candidate.username,
                "profile update for another user rejected"
            );
            return Err(err);
        }

        let stored = self.profiles.put(&identity.username, candidate).await?;
        tracing::info!(username = %identity.username, "profile replaced");
        Ok(stored)
    }

    pub async fn get_settings(&self, identity: &UserIdentity) -> Result<SettingsRow, AccountError> {
        self.settings
            .get(&identity.username)
            .await?
            .ok_or(AccountError::NotFound("User settings"))
    }

    /// Replace the caller's settings wholesale (create if absent).
    pub async fn update_settings(
        &self,
        identity: &UserIdentity,
        settings: SettingsRow,
    ) -> Result<SettingsRow, AccountError> {
        let stored = self.settings.put(&identity.username, settings).await?;
        tracing::info!(username = %identity.username, "settings replaced");
        Ok(stored)
    }

    /// Remove the caller's profile and settings. Idempotent.
    ///
    /// The two removals are independent; if the second fails the first stays done.
    pub async fn delete_account(
        &self,
        identity: &UserIdentity,
    ) -> Result<AccountDeletion, AccountError> {
        let profile_removed = self.profiles.delete(&identity.username).await?;
        let settings_removed = self.settings.delete(&identity.username).await?;

        tracing::info!(
            username = %identity.username,
            profile_removed,
            settings_removed,
            "account records deleted"
        );
        Ok(AccountDeletion {
            profile_removed,
            settings_removed,
        })
    }
}
