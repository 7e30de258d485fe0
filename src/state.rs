use std::sync::Arc;

use crate::{
  domains::mail::{
    model::SendBulkMailRequest,
    service::{BulkMailService, BulkMailServiceImpl, MailServiceError},
  },
  email::{MailTransport, SendInfo},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn is_ready(&self) -> bool;
  fn send_bulk_mail(
    &self,
    req: SendBulkMailRequest,
  ) -> impl std::future::Future<Output = Result<SendInfo, MailServiceError>> + Send;
}

/// Handles shared by every request. Immutable once built; `mail_service` is
/// only `None` when the state was created without a transport.
#[derive(Clone)]
pub struct SharedAppState {
  pub mail_service: Option<Arc<BulkMailServiceImpl>>,
}

impl SharedAppState {
  pub fn new(transport: Arc<dyn MailTransport>, account: impl Into<String>) -> Self {
    let mail_service = Arc::new(BulkMailServiceImpl::new(transport, account));

    Self {
      mail_service: Some(mail_service),
    }
  }

  pub fn without_transport() -> Self {
    Self { mail_service: None }
  }
}

impl AppState for SharedAppState {
  fn is_ready(&self) -> bool {
    self.mail_service.is_some()
  }

  async fn send_bulk_mail(&self, req: SendBulkMailRequest) -> Result<SendInfo, MailServiceError> {
    match &self.mail_service {
      Some(mail_service) => mail_service.send_bulk_mail(req).await,
      None => Err(MailServiceError::NotReady),
    }
  }
}
