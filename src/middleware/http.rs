//! Transport-level middleware applied to every route.
//!
//! Request-id (`x-request-id`) generation + propagation, access log via
//! `TraceLayer`, body size limit and a global timeout. The limits come from
//! `Config::http`. The body limit is enforced when a handler reads the body
//! (`DefaultBodyLimit`), so an oversized request still gets the JSON error
//! envelope and unauthenticated requests are still 401.

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::http::header::HeaderName;
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::HttpLimits;
use crate::error::AppError;

pub fn apply(router: Router, limits: &HttpLimits) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let layers = ServiceBuilder::new()
        // Timeout errors become 408; anything else that escapes is a 500.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                tracing::warn!("request timed out");
                AppError::Timeout
            } else {
                tracing::error!(error = %err, "unhandled middleware error");
                AppError::Internal
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(TimeoutLayer::new(limits.request_timeout))
        .layer(TraceLayer::new_for_http());

    router
        .layer(DefaultBodyLimit::max(limits.body_limit_bytes))
        .layer(layers)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        routing::{get, post},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::api::v1::extractors::ApiJson;

    fn router() -> Router {
        let inner = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    "done"
                }),
            )
            .route("/echo", post(|ApiJson(body): ApiJson<Value>| async move { body.to_string() }));

        apply(
            inner,
            &HttpLimits {
                request_timeout: Duration::from_millis(50),
                body_limit_bytes: 64,
            },
        )
    }

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let response = router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn timeout_is_408_with_error_envelope() {
        let request = Request::builder().uri("/slow").body(Body::empty()).unwrap();

        let (status, json) = call(request).await;

        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(json["error"]["code"], "REQUEST_TIMEOUT");
    }

    #[tokio::test]
    async fn oversized_body_is_413_with_error_envelope() {
        let body = format!(r#"{{"padding":"{}"}}"#, "x".repeat(256));
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap();

        let (status, json) = call(request).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json["error"]["code"], "PAYLOAD_TOO_LARGE");
    }

    #[tokio::test]
    async fn body_within_limit_passes() {
        let request = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"ok":true}"#))
            .unwrap();

        let (status, _) = call(request).await;

        assert_eq!(status, StatusCode::OK);
    }
}
