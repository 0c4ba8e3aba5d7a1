use std::fmt;

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::repos::user_repo::SharedUserStore;
use crate::services::auth::error::TokenError;
use crate::services::auth::identity::UserIdentity;

/// Access token (JWT) claims.
///
/// `sub` is the username. Validation of `iss/aud/exp` is done by
/// `jsonwebtoken::Validation`; emptiness of `sub` is checked by us.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub aud: String,
    pub sub: String,
    pub exp: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Resolves a bearer credential into a `UserIdentity`.
///
/// Implementations must be deterministic per credential and fail closed: any
/// credential that cannot be fully resolved is an error, never a default identity.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    async fn validate(&self, credential: &str) -> Result<UserIdentity, TokenError>;
}

/// HS256 JWT validator backed by the user directory.
///
/// The token proves *who*; the directory says whether that account is active.
pub struct JwtTokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    users: SharedUserStore,
}

impl fmt::Debug for JwtTokenValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtTokenValidator")
            .field("validation", &self.validation)
            .field("users", &self.users.backend_name())
            .finish()
    }
}

impl JwtTokenValidator {
    pub fn new(
        secret: &[u8],
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
        users: SharedUserStore,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            users,
        }
    }

    /// Signature + `iss/aud/exp` + non-empty `sub`.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        if data.claims.sub.trim().is_empty() {
            return Err(TokenError::EmptyClaim("sub"));
        }

        Ok(data.claims)
    }
}

#[async_trait]
impl TokenValidator for JwtTokenValidator {
    async fn validate(&self, credential: &str) -> Result<UserIdentity, TokenError> {
        let claims = self.verify(credential)?;

        let user = self
            .users
            .get(&claims.sub)
            .await?
            .ok_or(TokenError::UnknownSubject)?;

        let mut identity = UserIdentity::new(user.username.clone(), user.is_active());
        identity.jti = claims.jti;
        Ok(identity)
    }
}
