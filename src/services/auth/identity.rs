/// Who is making the request, as resolved from the bearer credential.
///
/// Built fresh for every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub username: String,
    pub is_active: bool,
    // Token id, for log correlation
    pub jti: Option<String>,
}

impl UserIdentity {
    pub fn new(username: impl Into<String>, is_active: bool) -> Self {
        Self {
            username: username.into(),
            is_active,
            jti: None,
        }
    }
}
