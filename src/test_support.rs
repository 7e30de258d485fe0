use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{DeliveryError, MailTransport, OutgoingMail, SendEnvelope, SendInfo},
  state::SharedAppState,
};

mockall::mock! {
    pub MailTransport {}

    #[async_trait]
    impl MailTransport for MailTransport {
        async fn send(&self, mail: OutgoingMail) -> Result<SendInfo, DeliveryError>;
    }
}

pub fn sample_info() -> SendInfo {
  SendInfo {
    accepted: vec![
      "sender@example.com".to_string(),
      "a@x.com".to_string(),
      "b@x.com".to_string(),
    ],
    rejected: Vec::new(),
    envelope: SendEnvelope {
      from: "sender@example.com".to_string(),
      to: vec![
        "sender@example.com".to_string(),
        "a@x.com".to_string(),
        "b@x.com".to_string(),
      ],
    },
    message_id: "<test-id@example.com>".to_string(),
    response: "250 2.0.0 OK".to_string(),
  }
}

pub fn app_with_transport(transport: MockMailTransport, account: &str) -> Router {
  let state = SharedAppState::new(Arc::new(transport), account);
  create_app(state)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}

pub async fn post_empty(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");

  send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
