use async_trait::async_trait;
use sqlx::PgPool;

use super::model::{Credential, CredentialRecord};

/// Read-only access to the persisted credential record.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
  async fn find_first(&self) -> Result<Option<Credential>, sqlx::Error>;
}

pub struct SqlxCredentialRepository {
  pub pool: PgPool,
}

impl SqlxCredentialRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl CredentialRepository for SqlxCredentialRepository {
  async fn find_first(&self) -> Result<Option<Credential>, sqlx::Error> {
    let record = CredentialRecord::find_first(&self.pool).await?;
    Ok(record.map(Credential::from))
  }
}
