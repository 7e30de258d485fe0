use std::sync::Arc;

use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use bulk_mail_api::app::{create_app, SERVICE_NAME};
use bulk_mail_api::config::Config;
use bulk_mail_api::state::SharedAppState;
use bulk_mail_api::utils::{init_credentials, init_mail_transport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = Config::from_env()?;

  let credential = init_credentials(&config).await.inspect_err(|e| {
    tracing::error!("No usable SMTP credentials, exiting: {}", e);
  })?;
  let mailer = init_mail_transport(&config, &credential).await?;

  let app_state = SharedAppState::new(Arc::new(mailer), credential.username.clone());
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

  tracing::info!("{} Server started on port {}", SERVICE_NAME, config.port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut stream) => {
        stream.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
