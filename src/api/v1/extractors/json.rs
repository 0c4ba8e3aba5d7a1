//! `Json<T>` with rejections mapped onto `AppError`, so a body with wrong
//! types, missing fields or a wrong content type gets the same error envelope
//! as everything else. Bodies over the configured `DefaultBodyLimit` are 413.
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};

use crate::error::AppError;

pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::debug!("rejected oversized request body");
                Err(AppError::PayloadTooLarge)
            }
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected request body");
                Err(AppError::bad_request("INVALID_BODY", rejection.body_text()))
            }
        }
    }
}
