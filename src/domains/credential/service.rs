use async_trait::async_trait;
use std::error::Error;

use super::{model::Credential, repository::CredentialRepository};
use crate::config::non_empty_var;
use crate::impl_service_error_conversions;

#[derive(Debug)]
pub enum CredentialError {
  StoreError(String),
  Missing(String),
}

impl Error for CredentialError {}

impl std::fmt::Display for CredentialError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CredentialError::StoreError(msg) => write!(f, "Credential store error: {}", msg),
      CredentialError::Missing(msg) => write!(f, "Missing credentials: {}", msg),
    }
  }
}

impl_service_error_conversions!(CredentialError, StoreError);

/// One source of SMTP credentials. `Ok(None)` means "nothing usable here,
/// ask the next provider"; an error stops resolution.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
  fn name(&self) -> &'static str;
  async fn load(&self) -> Result<Option<Credential>, CredentialError>;
}

pub struct StoreCredentialProvider<R> {
  repository: R,
}

impl<R> StoreCredentialProvider<R>
where
  R: CredentialRepository,
{
  pub fn new(repository: R) -> Self {
    Self { repository }
  }
}

#[async_trait]
impl<R> CredentialProvider for StoreCredentialProvider<R>
where
  R: CredentialRepository,
{
  fn name(&self) -> &'static str {
    "database"
  }

  async fn load(&self) -> Result<Option<Credential>, CredentialError> {
    let credential = self.repository.find_first().await?;
    Ok(credential.filter(Credential::is_usable))
  }
}

pub struct EnvCredentialProvider {
  username: Option<String>,
  secret: Option<String>,
}

impl EnvCredentialProvider {
  pub fn new(username: Option<String>, secret: Option<String>) -> Self {
    Self { username, secret }
  }

  pub fn from_env() -> Self {
    Self::new(non_empty_var("EMAIL_USER"), non_empty_var("EMAIL_PASS"))
  }
}

#[async_trait]
impl CredentialProvider for EnvCredentialProvider {
  fn name(&self) -> &'static str {
    "environment"
  }

  async fn load(&self) -> Result<Option<Credential>, CredentialError> {
    let credential = match (&self.username, &self.secret) {
      (Some(username), Some(secret)) => Some(Credential::new(username.clone(), secret.clone())),
      _ => None,
    };
    Ok(credential.filter(Credential::is_usable))
  }
}

/// Tries each provider in order and returns the first usable credential.
pub struct CredentialResolver {
  providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialResolver {
  pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
    Self { providers }
  }

  pub async fn resolve(&self) -> Result<Credential, CredentialError> {
    for provider in &self.providers {
      match provider.load().await {
        Ok(Some(credential)) => {
          tracing::info!(source = provider.name(), username = %credential.username, "Using SMTP credentials");
          return Ok(credential);
        }
        Ok(None) => tracing::debug!(source = provider.name(), "No usable credentials"),
        Err(e) => {
          tracing::error!(source = provider.name(), error = %e, "Credential lookup failed");
          return Err(e);
        }
      }
    }

    Err(CredentialError::Missing(
      "EMAIL_USER and EMAIL_PASS must be set when no stored credentials exist".to_string(),
    ))
  }
}
