//! CORS policy for the browser frontend.
//!
//! Policy:
//! - Origins come from `Config::cors_allowed_origins` (exact match), and
//!   credentialed requests are allowed for them.
//! - An empty list in development falls back to any origin WITHOUT credentials.
//!   An empty list in production emits no CORS headers at all.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub fn apply(router: Router, config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .max_age(Duration::from_secs(60 * 10));

    let cors = if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
    } else if config.app_env.is_production() {
        base.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        // Do not combine wildcard origin with credentials
        base.allow_origin(Any)
    };

    router.layer(cors)
}
