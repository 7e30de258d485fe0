use std::env;
use std::error::Error;

use crate::email::SmtpConfig;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug)]
pub enum ConfigError {
  InvalidValue { key: &'static str, value: String },
}

impl Error for ConfigError {}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ConfigError::InvalidValue { key, value } => write!(f, "Invalid value for {}: {:?}", key, value),
    }
  }
}

/// Process configuration, read once at startup.
///
/// Credentials are not part of it: they come out of the credential resolver,
/// which may prefer a database record over `EMAIL_USER`/`EMAIL_PASS`.
#[derive(Debug, Clone)]
pub struct Config {
  pub port: u16,
  pub smtp: SmtpConfig,
  pub database_url: Option<String>,
}

impl Config {
  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = SmtpConfig::default();

    Ok(Config {
      port: parse_port("PORT", DEFAULT_PORT)?,
      smtp: SmtpConfig {
        host: non_empty_var("SMTP_HOST").unwrap_or(defaults.host),
        port: parse_port("SMTP_PORT", defaults.port)?,
      },
      database_url: non_empty_var("DATABASE_URL"),
    })
  }
}

pub(crate) fn non_empty_var(key: &str) -> Option<String> {
  env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_port(key: &'static str, default: u16) -> Result<u16, ConfigError> {
  match non_empty_var(key) {
    Some(value) => value
      .trim()
      .parse()
      .map_err(|_| ConfigError::InvalidValue { key, value }),
    None => Ok(default),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn clear_env() {
    for key in ["PORT", "SMTP_HOST", "SMTP_PORT", "DATABASE_URL"] {
      env::remove_var(key);
    }
  }

  #[test]
  #[serial]
  fn test_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 5000);
    assert_eq!(config.smtp.host, "smtp.gmail.com");
    assert_eq!(config.smtp.port, 587);
    assert!(config.database_url.is_none());
  }

  #[test]
  #[serial]
  fn test_from_env_overrides() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("SMTP_HOST", "mailhog");
    env::set_var("SMTP_PORT", "1025");
    env::set_var("DATABASE_URL", "postgres://localhost/bulk_mail");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.smtp.host, "mailhog");
    assert_eq!(config.smtp.port, 1025);
    assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/bulk_mail"));

    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_invalid_port() {
    clear_env();
    env::set_var("PORT", "not-a-port");

    let err = Config::from_env().unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for PORT: \"not-a-port\"");

    clear_env();
  }

  #[test]
  #[serial]
  fn test_from_env_blank_database_url_is_ignored() {
    clear_env();
    env::set_var("DATABASE_URL", "   ");

    let config = Config::from_env().unwrap();
    assert!(config.database_url.is_none());

    clear_env();
  }
}
