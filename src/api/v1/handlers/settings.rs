/*
 * Responsibility
 * - GET/PUT /settings (キーは常に認証済み username)
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::settings::SettingsBody,
        extractors::{ApiJson, AuthCtxExtractor},
    },
    error::AppError,
    state::AppState,
};

pub async fn get_settings(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<SettingsBody>, AppError> {
    let row = state.accounts.get_settings(&ctx.identity).await?;
    Ok(Json(row.into()))
}

pub async fn update_settings(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    ApiJson(req): ApiJson<SettingsBody>,
) -> Result<Json<SettingsBody>, AppError> {
    let row = state
        .accounts
        .update_settings(&ctx.identity, req.into())
        .await?;
    Ok(Json(row.into()))
}
