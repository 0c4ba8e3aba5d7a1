/*
 * Responsibility
 * - ログイン可能なアカウント (UserRow) の保存形式
 * - token の sub (username) から is_active を引くための directory
 */
use std::{fmt, sync::Arc};

use crate::repos::store::KeyValueStore;

#[derive(Clone, PartialEq, Eq)]
pub struct UserRow {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub hashed_password: String,
    pub disabled: bool,
}

impl UserRow {
    pub fn is_active(&self) -> bool {
        !self.disabled
    }
}

impl fmt::Debug for UserRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print the password hash
        f.debug_struct("UserRow")
            .field("username", &self.username)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("disabled", &self.disabled)
            .finish()
    }
}

pub type SharedUserStore = Arc<dyn KeyValueStore<UserRow>>;
