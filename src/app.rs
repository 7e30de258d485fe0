use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{domains::mail::rest::mail_routes, state::SharedAppState};

pub const SERVICE_NAME: &str = "BulkMail";

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(health_handler))
    .merge(mail_routes())
    .layer(CorsLayer::permissive())
    .with_state(state)
}

pub async fn health_handler() -> String {
  format!("🚀 {} Backend is Running!", SERVICE_NAME)
}
