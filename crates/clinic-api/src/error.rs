//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use clinic_core::FieldErrors;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// One or more mandatory fields were missing or blank.
  #[error("validation failed: {0}")]
  Validation(#[from] FieldErrors),

  /// The body was not JSON of the expected shape.
  #[error("malformed body: {0}")]
  Body(#[from] JsonRejection),

  #[error("not found")]
  NotFound,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Wrap a store failure, logging it with the operation that hit it.
  pub fn store<E>(operation: &'static str, id: Option<i64>, e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    match id {
      Some(id) => tracing::error!(operation, id, error = %e, "store failure"),
      None => tracing::error!(operation, error = %e, "store failure"),
    }
    ApiError::Store(Box::new(e))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(errors) => {
        (StatusCode::BAD_REQUEST, Json(errors)).into_response()
      }
      ApiError::Body(rejection) => {
        // axum reports type mismatches as 422; they are reported as 400 here.
        let status = match rejection.status() {
          StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
          other => other,
        };
        (status, Json(json!({ "error": rejection.body_text() }))).into_response()
      }
      ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
      ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
  }
}
