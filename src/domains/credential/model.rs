use sqlx::{FromRow, PgExecutor};

/// SMTP account used for every outbound message. The username doubles as the
/// sender address.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
  pub username: String,
  pub secret: String,
}

impl Credential {
  pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      secret: secret.into(),
    }
  }

  /// Both fields must be non-blank for the credential to be used.
  pub fn is_usable(&self) -> bool {
    !self.username.trim().is_empty() && !self.secret.trim().is_empty()
  }
}

impl std::fmt::Debug for Credential {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credential")
      .field("username", &self.username)
      .field("secret", &"***")
      .finish()
  }
}

#[derive(Debug, Clone, FromRow)]
pub struct CredentialRecord {
  pub user: String,
  pub pass: String,
}

impl CredentialRecord {
  pub async fn find_first<'e, E>(executor: E) -> Result<Option<CredentialRecord>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    let record = sqlx::query_as::<_, CredentialRecord>(r#"SELECT "user", pass FROM credentials ORDER BY id LIMIT 1"#)
      .fetch_optional(executor)
      .await?;

    Ok(record)
  }
}

impl From<CredentialRecord> for Credential {
  fn from(record: CredentialRecord) -> Self {
    Credential::new(record.user, record.pass)
  }
}
