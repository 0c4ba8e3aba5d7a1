/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: token 検証 + login, accounts: profile/settings 操作, users: directory
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::{fmt, sync::Arc};

use crate::repos::user_repo::SharedUserStore;
use crate::services::{account::AccountService, auth::AuthService};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub accounts: AccountService,
    pub users: SharedUserStore,
}

impl AppState {
    pub fn new(auth: Arc<AuthService>, accounts: AccountService, users: SharedUserStore) -> Self {
        Self {
            auth,
            accounts,
            users,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("auth", &self.auth)
            .field("accounts", &self.accounts)
            .field("users", &self.users.backend_name())
            .finish()
    }
}
