/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::repos::user_repo::SharedUserStore;
use crate::services::auth::{
    access_jwt::JwtTokenValidator, gate::ActiveUserGate, jwt::JwtIssuer,
    token_service::AuthService,
};

/// `absent_user_hash` is any bcrypt hash made at the cost used for stored
/// passwords; login verifies against it when the username is unknown.
pub fn build_auth_service(
    config: &Config,
    users: SharedUserStore,
    absent_user_hash: String,
) -> Arc<AuthService> {
    let secret = config.access_jwt_secret.as_bytes();

    let validator = JwtTokenValidator::new(
        secret,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
        users.clone(),
    );

    let issuer = JwtIssuer::new(
        secret,
        config.auth_issuer.clone(),
        config.auth_audience.clone(),
        config.access_token_ttl_seconds,
    );

    Arc::new(AuthService::new(
        ActiveUserGate::new(Arc::new(validator)),
        issuer,
        users,
        absent_user_hash,
    ))
}
