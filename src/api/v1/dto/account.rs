use serde::Serialize;

use crate::repos::user_repo::UserRow;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// The caller's own account, without the password hash.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub disabled: bool,
}

impl From<UserRow> for MeResponse {
    fn from(u: UserRow) -> Self {
        MeResponse {
            username: u.username,
            full_name: u.full_name,
            email: u.email,
            disabled: u.disabled,
        }
    }
}
