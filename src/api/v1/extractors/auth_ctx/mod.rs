//! Caller identity for protected handlers.
//!
//! `types` holds the plain `AuthCtx`; `core` is the axum extractor that pulls
//! it out of the request extensions set by the access middleware.

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
