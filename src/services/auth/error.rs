use thiserror::Error;

use crate::repos::RepoError;

/// Failures while validating or issuing a bearer credential.
///
/// These never leave the auth layer as-is: the gate collapses every variant
/// into `AuthError::Unauthenticated` (fail-closed).
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("empty '{0}' claim")]
    EmptyClaim(&'static str),

    #[error("token subject is not a known user")]
    UnknownSubject,

    #[error("user directory failure: {0}")]
    Directory(#[from] RepoError),

    #[error("jwt signing failed: {0}")]
    Signing(jsonwebtoken::errors::Error),
}

/// Outcome of the active-user gate and of login.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("could not validate credentials")]
    Unauthenticated,

    #[error("incorrect username or password")]
    InvalidCredentials,

    #[error("inactive user")]
    AccountDisabled,

    #[error("authentication backend failure")]
    Internal,
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
