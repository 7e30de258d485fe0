/// Generates a `From<sqlx::Error>` impl that folds database failures into the
/// given variant of a service error.
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(CredentialError, StoreError);
/// ```
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $variant:ident) => {
    impl From<sqlx::Error> for $error_type {
      fn from(err: sqlx::Error) -> Self {
        <$error_type>::$variant(format!("Database error: {}", err))
      }
    }
  };
}
