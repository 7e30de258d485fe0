use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
    }
  }
}

/// A single message as handed to the transport. Recipients in `bcc` never
/// show up in any visible header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
  pub from: String,
  pub to: String,
  pub bcc: Vec<String>,
  pub subject: String,
  pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEnvelope {
  pub from: String,
  pub to: Vec<String>,
}

/// Acknowledgment returned once the SMTP server accepted the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInfo {
  pub accepted: Vec<String>,
  pub rejected: Vec<String>,
  pub envelope: SendEnvelope,
  pub message_id: String,
  pub response: String,
}
