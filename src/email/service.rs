use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::{authentication::Credentials, response::Response},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use uuid::Uuid;

use crate::domains::credential::model::Credential;
use crate::email::error::DeliveryError;
use crate::email::types::{OutgoingMail, SendEnvelope, SendInfo, SmtpConfig};

#[async_trait]
pub trait MailTransport: Send + Sync {
  /// Makes exactly one delivery attempt.
  async fn send(&self, mail: OutgoingMail) -> Result<SendInfo, DeliveryError>;
}

pub struct SmtpMailer {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(smtp_config: SmtpConfig, credential: &Credential) -> anyhow::Result<Self> {
    let creds = Credentials::new(credential.username.clone(), credential.secret.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpMailer {
      smtp_config,
      transporter,
    })
  }

  pub(crate) fn build_message(mail: &OutgoingMail) -> Result<Message, DeliveryError> {
    let mut builder = Message::builder()
      .message_id(Some(generate_message_id(&mail.from)))
      .from(parse_mailbox(&mail.from)?)
      .to(parse_mailbox(&mail.to)?)
      .subject(mail.subject.clone())
      .header(ContentType::TEXT_PLAIN);

    for recipient in &mail.bcc {
      builder = builder.bcc(parse_mailbox(recipient)?);
    }

    Ok(builder.body(mail.body.clone())?)
  }
}

#[async_trait]
impl MailTransport for SmtpMailer {
  async fn send(&self, mail: OutgoingMail) -> Result<SendInfo, DeliveryError> {
    let message = Self::build_message(&mail)?;
    let message_id = message
      .headers()
      .get_raw("Message-ID")
      .unwrap_or_default()
      .to_string();
    let envelope = SendEnvelope {
      from: message
        .envelope()
        .from()
        .map(|address| address.to_string())
        .unwrap_or_default(),
      to: message.envelope().to().iter().map(|address| address.to_string()).collect(),
    };

    tracing::debug!(
      host = %self.smtp_config.host,
      port = self.smtp_config.port,
      recipients = envelope.to.len(),
      "Sending over SMTP"
    );
    let response = self.transporter.send(message).await?;

    Ok(SendInfo {
      accepted: envelope.to.clone(),
      rejected: Vec::new(),
      envelope,
      message_id,
      response: format_response(&response),
    })
  }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
  address
    .trim()
    .parse()
    .map_err(|e| DeliveryError::new(format!("Invalid address {:?}: {}", address, e)))
}

fn generate_message_id(from: &str) -> String {
  let domain = from
    .rsplit_once('@')
    .map(|(_, domain)| domain.trim())
    .filter(|domain| !domain.is_empty())
    .unwrap_or("localhost");
  format!("<{}@{}>", Uuid::new_v4(), domain)
}

fn format_response(response: &Response) -> String {
  let text = response.message().collect::<Vec<_>>().join(" ");
  format!("{} {}", response.code(), text).trim_end().to_string()
}
