use std::fmt;

use crate::repos::user_repo::SharedUserStore;
use crate::services::auth::{
    error::AuthError,
    gate::ActiveUserGate,
    identity::UserIdentity,
    jwt::{IssuedToken, JwtIssuer},
    password::verify_password,
};

/// Entry point used by the middleware (authenticate) and the token endpoint (login).
pub struct AuthService {
    gate: ActiveUserGate,
    issuer: JwtIssuer,
    users: SharedUserStore,
    // Verified against when the username is unknown, so both login
    // failures cost one bcrypt verification. Same cost as stored hashes.
    absent_user_hash: String,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthService")
            .field("issuer", &self.issuer)
            .field("users", &self.users.backend_name())
            .finish()
    }
}

impl AuthService {
    pub fn new(
        gate: ActiveUserGate,
        issuer: JwtIssuer,
        users: SharedUserStore,
        absent_user_hash: String,
    ) -> Self {
        Self {
            gate,
            issuer,
            users,
            absent_user_hash,
        }
    }

    pub async fn authenticate(&self, credential: &str) -> Result<UserIdentity, AuthError> {
        self.gate.authenticate(credential).await
    }

    /// Password login.
    ///
    /// Unknown user and wrong password are reported identically, and both
    /// run one bcrypt verification.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let user = self.users.get(username).await.map_err(|err| {
            tracing::error!(error = %err, "user directory lookup failed");
            AuthError::Internal
        })?;

        let hashed = match &user {
            Some(user) => user.hashed_password.clone(),
            None => self.absent_user_hash.clone(),
        };
        let matched = verify_password(password.to_string(), hashed)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, username = %username, "password verification failed");
                AuthError::Internal
            })?;

        let Some(user) = user else {
            tracing::info!(username = %username, "login for unknown user");
            return Err(AuthError::InvalidCredentials);
        };
        if !matched {
            tracing::info!(username = %username, "login with wrong password");
            return Err(AuthError::InvalidCredentials);
        }
        if !user.is_active() {
            tracing::info!(username = %username, "login for disabled account");
            return Err(AuthError::AccountDisabled);
        }

        let token = self.issuer.issue_access_token(&user.username).map_err(|err| {
            tracing::error!(error = %err, "failed to issue access token");
            AuthError::Internal
        })?;

        tracing::info!(username = %user.username, "access token issued");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use super::*;
    use crate::repos::{MemoryStore, store::KeyValueStore, user_repo::UserRow};
    use crate::services::auth::{access_jwt::JwtTokenValidator, password::hash_password};

    const SECRET: &[u8] = b"test-secret-test-secret-test-secret";

    async fn service() -> AuthService {
        service_with_absent_user_hash(hash_password("unused", 4).unwrap()).await
    }

    async fn service_with_absent_user_hash(absent_user_hash: String) -> AuthService {
        let users: MemoryStore<UserRow> = MemoryStore::new();
        let hashed = hash_password("secret", 4).unwrap();
        for (name, disabled) in [("johndoe", false), ("alice", true)] {
            users
                .put(
                    name,
                    UserRow {
                        username: name.to_string(),
                        full_name: None,
                        email: None,
                        hashed_password: hashed.clone(),
                        disabled,
                    },
                )
                .await
                .unwrap();
        }
        let users: SharedUserStore = Arc::new(users);

        let validator = JwtTokenValidator::new(SECRET, "iss", "aud", 0, users.clone());
        let issuer = JwtIssuer::new(SECRET, "iss".to_string(), "aud".to_string(), 900);
        AuthService::new(
            ActiveUserGate::new(Arc::new(validator)),
            issuer,
            users,
            absent_user_hash,
        )
    }

    #[tokio::test]
    async fn login_then_authenticate_round_trip() {
        let auth = service().await;

        let token = auth.login("johndoe", "secret").await.unwrap();
        let identity = auth.authenticate(&token.access_token).await.unwrap();

        assert_eq!(token.expires_in, 900);
        assert_eq!(identity.username, "johndoe");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_look_the_same() {
        let auth = service().await;

        assert_eq!(
            auth.login("johndoe", "nope").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            auth.login("ghost", "secret").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn unknown_user_still_runs_password_verification() {
        // An unparsable hash makes bcrypt fail, which shows up as Internal.
        let auth = service_with_absent_user_hash("not-a-bcrypt-hash".to_string()).await;

        assert_eq!(
            auth.login("ghost", "secret").await.unwrap_err(),
            AuthError::Internal
        );
        assert_eq!(
            auth.login("johndoe", "nope").await.unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[tokio::test]
    async fn unknown_user_costs_about_as_much_as_wrong_password() {
        let auth = service_with_absent_user_hash(hash_password("unused", 4).unwrap()).await;
        // Warm up the blocking pool.
        let _ = auth.login("johndoe", "nope").await;

        let started = Instant::now();
        for _ in 0..5 {
            let _ = auth.login("ghost", "nope").await;
        }
        let unknown = started.elapsed();

        let started = Instant::now();
        for _ in 0..5 {
            let _ = auth.login("johndoe", "nope").await;
        }
        let known = started.elapsed();

        assert!(
            unknown * 4 >= known,
            "unknown user {unknown:?} vs known user {known:?}"
        );
    }

    #[tokio::test]
    async fn disabled_account_cannot_log_in() {
        let auth = service().await;

        assert_eq!(
            auth.login("alice", "secret").await.unwrap_err(),
            AuthError::AccountDisabled
        );
    }
}
