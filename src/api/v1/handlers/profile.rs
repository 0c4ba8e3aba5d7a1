/*
 * Responsibility
 * - GET/PUT /profile
 * - 呼び出し主体は AuthCtxExtractor のみ、所有者チェックは AccountService 側
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::profile::ProfileBody,
        extractors::{ApiJson, AuthCtxExtractor},
    },
    error::AppError,
    state::AppState,
};

pub async fn get_profile(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<ProfileBody>, AppError> {
    let row = state.accounts.get_profile(&ctx.identity).await?;
    Ok(Json(row.into()))
}

pub async fn update_profile(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    ApiJson(req): ApiJson<ProfileBody>,
) -> Result<Json<ProfileBody>, AppError> {
    let row = state
        .accounts
        .update_profile(&ctx.identity, req.into())
        .await?;
    Ok(Json(row.into()))
}
