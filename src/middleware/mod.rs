/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: bearer token -> AuthCtx, cors: ブラウザ向け, http: request-id/trace/limit/timeout
 */
pub mod auth;
pub mod cors;
pub mod http;
