//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// Only the read and delete paths surface this: create and update translate
/// store failures into their legacy plain-text response bodies instead.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": e.to_string() })),
        )
          .into_response()
      }
    }
  }
}
