/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 公開: /health, /auth/token
 * - 認証必須 (access middleware を route_layer で適用): /profile, /settings, /account, /me
 */
use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{
    account::{delete_account, me},
    health::health,
    profile::{get_profile, update_profile},
    settings::{get_settings, update_settings},
    token::issue_token,
};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/settings", get(get_settings).put(update_settings))
        .route("/account", delete(delete_account))
        .route("/me", get(me));
    let protected = middleware::auth::access::apply(protected, state);

    Router::new()
        .route("/health", get(health))
        .route("/auth/token", post(issue_token))
        .merge(protected)
}
