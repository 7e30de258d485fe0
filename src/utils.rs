pub mod error;

use crate::{
  config::Config,
  db::pool::create_pool,
  domains::credential::{
    model::Credential,
    repository::SqlxCredentialRepository,
    service::{CredentialProvider, CredentialResolver, EnvCredentialProvider, StoreCredentialProvider},
  },
  email::SmtpMailer,
};

/// Database record first (when `DATABASE_URL` is set), then `EMAIL_USER`/`EMAIL_PASS`.
pub async fn init_credentials(config: &Config) -> anyhow::Result<Credential> {
  let mut providers: Vec<Box<dyn CredentialProvider>> = Vec::new();

  if let Some(database_url) = &config.database_url {
    let pool = create_pool(database_url)
      .await
      .map_err(|e| anyhow::anyhow!("Failed to connect to credential store: {}", e))?;
    providers.push(Box::new(StoreCredentialProvider::new(SqlxCredentialRepository::new(pool))));
  }
  providers.push(Box::new(EnvCredentialProvider::from_env()));

  let credential = CredentialResolver::new(providers).resolve().await?;
  Ok(credential)
}

pub async fn init_mail_transport(config: &Config, credential: &Credential) -> anyhow::Result<SmtpMailer> {
  let mailer = SmtpMailer::new(config.smtp.clone(), credential)?;
  tracing::info!(host = %config.smtp.host, port = config.smtp.port, "Mail transporter ready");
  Ok(mailer)
}
