/*
 * Responsibility
 * - DELETE /account (profile + settings を削除, 冪等)
 * - GET /me (認証済みアカウントの情報)
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::account::{MeResponse, MessageResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    state::AppState,
};

pub async fn delete_account(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<MessageResponse>, AppError> {
    // Same confirmation whether or not anything existed.
    state.accounts.delete_account(&ctx.identity).await?;

    Ok(Json(MessageResponse {
        message: "Account deleted successfully",
    }))
}

pub async fn me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<MeResponse>, AppError> {
    let user = state
        .users
        .get(ctx.username())
        .await?
        .ok_or(AppError::not_found("User"))?;

    Ok(Json(user.into()))
}
