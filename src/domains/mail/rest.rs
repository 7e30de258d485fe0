use axum::{
  extract::{rejection::JsonRejection, Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::{
  model::{SendBulkMailRequest, SendBulkMailResponse},
  service::MailServiceError,
};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn mail_routes() -> Router<SharedAppState> {
  Router::new().route("/send-bulk-mail", post(send_bulk_mail_handler))
}

pub async fn send_bulk_mail_handler(
  State(state): State<SharedAppState>,
  payload: Result<Option<Json<SendBulkMailRequest>>, JsonRejection>,
) -> Result<JsonResponse<SendBulkMailResponse>, AppError> {
  if !state.is_ready() {
    return Err(MailServiceError::NotReady.into());
  }

  // No content type means no body to read: treat it as an empty request.
  let payload = match payload? {
    Some(Json(payload)) => payload,
    None => SendBulkMailRequest::default(),
  };

  let info = state.send_bulk_mail(payload).await?;
  Ok(JsonResponse(SendBulkMailResponse::success(info)))
}
