/*
 * Responsibility
 * - handler が受け取る extractor を束ねる
 *   - AuthCtx / AuthCtxExtractor: 認証済みの呼び出し主体
 *   - ApiJson: JSON body (失敗は AppError の 400 に統一)
 */
mod auth_ctx;
mod json;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor};
pub use json::ApiJson;
