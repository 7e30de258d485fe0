use axum::{
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::mail::model::STATUS_ERROR;

/// Request-level failure rendered as `{"status": "Error", "error": <message>}`.
#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "status": STATUS_ERROR,
      "error": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<JsonRejection> for AppError {
  fn from(rejection: JsonRejection) -> Self {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    AppError::new(rejection.status(), rejection.body_text())
  }
}

impl From<crate::domains::mail::service::MailServiceError> for AppError {
  fn from(error: crate::domains::mail::service::MailServiceError) -> Self {
    use crate::domains::mail::service::{MailServiceError, NOT_READY_MESSAGE, NO_RECIPIENTS_MESSAGE};
    match error {
      MailServiceError::NoRecipients => AppError::bad_request(NO_RECIPIENTS_MESSAGE),
      MailServiceError::NotReady => {
        tracing::error!("Send requested before the mail transport was initialized");
        AppError::internal_server_error(NOT_READY_MESSAGE)
      }
      MailServiceError::Delivery(err) => AppError::internal_server_error(err.to_string()),
    }
  }
}
