use axum::Json;
use axum::extract::State;

use crate::api::v1::dto::token::{TokenRequest, TokenResponse};
use crate::api::v1::extractors::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// POST /auth/token: password login, returns a bearer access token.
pub async fn issue_token(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let issued = state.auth.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse {
        access_token: issued.access_token,
        token_type: "Bearer".to_string(),
        expires_in: issued.expires_in,
    }))
}
