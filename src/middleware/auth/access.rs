//! Bearer token -> active-user gate -> `AuthCtx` in request extensions.
//!
//! Applied with `route_layer` on the protected routes only, so it runs after
//! routing (unknown paths stay 404) and before any handler extractor, including
//! the JSON body. An unauthenticated request never reaches a store.

use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// 保護したい Router に認証を掛ける。
///
/// ```ignore
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        tracing::warn!(
            path = %req.uri().path(),
            "missing or malformed authorization header"
        );
        return Err(AppError::unauthenticated());
    };

    // 署名 + iss/aud/exp + directory lookup + is_active は AuthService 側
    let identity = state.auth.authenticate(&token).await?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::new(identity));

    Ok(next.run(req).await)
}

/// `Authorization: Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
