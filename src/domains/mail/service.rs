use async_trait::async_trait;
use std::{error::Error, sync::Arc};
use validator::Validate;

use super::model::SendBulkMailRequest;
use crate::email::{DeliveryError, MailTransport, OutgoingMail, SendInfo};

pub const NO_RECIPIENTS_MESSAGE: &str = "No recipients provided.";
pub const NOT_READY_MESSAGE: &str = "Mail transporter not ready.";

#[derive(Debug)]
pub enum MailServiceError {
  NoRecipients,
  NotReady,
  Delivery(DeliveryError),
}

impl Error for MailServiceError {}

impl std::fmt::Display for MailServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      MailServiceError::NoRecipients => write!(f, "{}", NO_RECIPIENTS_MESSAGE),
      MailServiceError::NotReady => write!(f, "{}", NOT_READY_MESSAGE),
      MailServiceError::Delivery(err) => write!(f, "{}", err),
    }
  }
}

impl From<DeliveryError> for MailServiceError {
  fn from(err: DeliveryError) -> Self {
    MailServiceError::Delivery(err)
  }
}

#[async_trait]
pub trait BulkMailService: Send + Sync {
  async fn send_bulk_mail(&self, req: SendBulkMailRequest) -> Result<SendInfo, MailServiceError>;
}

/// Sends one message per request from the configured account to itself, with
/// the caller's recipients in Bcc.
pub struct BulkMailServiceImpl {
  transport: Arc<dyn MailTransport>,
  account: String,
}

impl BulkMailServiceImpl {
  pub fn new(transport: Arc<dyn MailTransport>, account: impl Into<String>) -> Self {
    Self {
      transport,
      account: account.into(),
    }
  }
}

#[async_trait]
impl BulkMailService for BulkMailServiceImpl {
  async fn send_bulk_mail(&self, req: SendBulkMailRequest) -> Result<SendInfo, MailServiceError> {
    req.validate().map_err(|_| MailServiceError::NoRecipients)?;

    let mail = OutgoingMail {
      from: self.account.clone(),
      to: self.account.clone(),
      bcc: req.recipients.unwrap_or_default(),
      subject: req.subject.unwrap_or_default(),
      body: req.message.unwrap_or_default(),
    };
    let recipient_count = mail.bcc.len();

    match self.transport.send(mail).await {
      Ok(info) => {
        tracing::info!(
          message_id = %info.message_id,
          recipients = recipient_count,
          response = %info.response,
          "Mail sent"
        );
        Ok(info)
      }
      Err(e) => {
        tracing::error!(recipients = recipient_count, error = %e, "Send error");
        Err(e.into())
      }
    }
  }
}
