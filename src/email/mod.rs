//! Outbound mail over SMTP.
//!
//! Everything leaves through a single [`SmtpMailer`] built at startup; the
//! [`MailTransport`] trait is the seam the HTTP layer and tests depend on.

mod error;
mod service;
mod types;

pub use error::DeliveryError;
pub use service::{MailTransport, SmtpMailer};
pub use types::{OutgoingMail, SendEnvelope, SendInfo, SmtpConfig};
