use std::error::Error;

/// Failure of a single send attempt. The display form is the underlying
/// reason and is what callers get back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryError {
  reason: String,
}

impl DeliveryError {
  pub fn new(reason: impl Into<String>) -> Self {
    Self { reason: reason.into() }
  }
}

impl Error for DeliveryError {}

impl std::fmt::Display for DeliveryError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.reason)
  }
}

impl From<lettre::error::Error> for DeliveryError {
  fn from(err: lettre::error::Error) -> Self {
    DeliveryError::new(format!("Failed to build message: {}", err))
  }
}

impl From<lettre::transport::smtp::Error> for DeliveryError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    DeliveryError::new(err.to_string())
  }
}
