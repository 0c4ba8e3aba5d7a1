use std::fmt;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

use crate::services::auth::access_jwt::AccessTokenClaims;
use crate::services::auth::error::TokenError;

/// A freshly signed access token.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: u64,
}

/// HS256 access-token signer. Shares its secret with `JwtTokenValidator`.
#[derive(Clone)]
pub struct JwtIssuer {
    issuer: String,
    audience: String,
    ttl_seconds: u64,
    encoding_key: EncodingKey,
}

impl fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl JwtIssuer {
    pub fn new(secret: &[u8], issuer: String, audience: String, ttl_seconds: u64) -> Self {
        Self {
            issuer,
            audience,
            ttl_seconds,
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    pub fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, claims, &self.encoding_key).map_err(TokenError::Signing)
    }

    /// Issue an access token whose subject is `username`.
    pub fn issue_access_token(&self, username: &str) -> Result<IssuedToken, TokenError> {
        let now = chrono::Utc::now().timestamp().max(0) as u64;

        let claims = AccessTokenClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: username.to_string(),
            exp: now.saturating_add(self.ttl_seconds),
            iat: Some(now),
            jti: Some(Uuid::new_v4().to_string()),
        };

        Ok(IssuedToken {
            access_token: self.sign(&claims)?,
            expires_in: self.ttl_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_ttl_saturates_instead_of_overflowing() {
        let issuer = JwtIssuer::new(b"secret", "iss".to_string(), "aud".to_string(), u64::MAX);

        let issued = issuer.issue_access_token("johndoe").unwrap();

        assert_eq!(issued.expires_in, u64::MAX);
        assert_eq!(issued.access_token.split('.').count(), 3);
    }
}
