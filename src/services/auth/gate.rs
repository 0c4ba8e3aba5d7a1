use std::{fmt, sync::Arc};

use crate::services::auth::access_jwt::TokenValidator;
use crate::services::auth::error::AuthError;
use crate::services::auth::identity::UserIdentity;

/// Resolves a credential and admits only active accounts.
///
/// Read-only: the gate never touches the profile or settings stores.
#[derive(Clone)]
pub struct ActiveUserGate {
    validator: Arc<dyn TokenValidator>,
}

impl fmt::Debug for ActiveUserGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveUserGate").finish_non_exhaustive()
    }
}

impl ActiveUserGate {
    pub fn new(validator: Arc<dyn TokenValidator>) -> Self {
        Self { validator }
    }

    pub async fn authenticate(&self, credential: &str) -> Result<UserIdentity, AuthError> {
        let identity = match self.validator.validate(credential).await {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "access token validation failed");
                return Err(AuthError::Unauthenticated);
            }
        };

        if !identity.is_active {
            tracing::warn!(username = %identity.username, "rejected disabled account");
            return Err(AuthError::AccountDisabled);
        }

        tracing::debug!(
            username = %identity.username,
            jti = ?identity.jti,
            "request authenticated"
        );
        Ok(identity)
    }
}
