use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::email::SendInfo;

pub const STATUS_SUCCESS: &str = "Success";
pub const STATUS_ERROR: &str = "Error";

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct SendBulkMailRequest {
  #[serde(default)]
  #[validate(required, length(min = 1))]
  pub recipients: Option<Vec<String>>,
  #[serde(default)]
  pub subject: Option<String>,
  #[serde(default)]
  pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendBulkMailResponse {
  pub status: String,
  pub info: SendInfo,
}

impl SendBulkMailResponse {
  pub fn success(info: SendInfo) -> Self {
    Self {
      status: STATUS_SUCCESS.to_string(),
      info,
    }
  }
}
