use axum::{
  body::Body,
  http::{self, Request, StatusCode},
};
use bulk_mail_api::{app::create_app, state::SharedAppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `app.oneshot()`

#[tokio::test]
async fn health_check_test() {
  let app = create_app(SharedAppState::without_transport());

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);

  let body = response.into_body().collect().await.unwrap().to_bytes();

  assert_eq!(&body[..], "🚀 BulkMail Backend is Running!".as_bytes());
}

#[tokio::test]
async fn health_check_handler_test() {
  let body = bulk_mail_api::app::health_handler().await;
  assert_eq!(body, "🚀 BulkMail Backend is Running!");
}

#[tokio::test]
async fn send_bulk_mail_before_transport_ready() {
  let app = create_app(SharedAppState::without_transport());

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::POST)
        .uri("/send-bulk-mail")
        .header("content-type", "application/json")
        .body(Body::from(
          json!({ "recipients": ["a@x.com"], "subject": "Hi", "message": "Body" }).to_string(),
        ))
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let body = response.into_body().collect().await.unwrap().to_bytes();
  let value: Value = serde_json::from_slice(&body).unwrap();
  assert_eq!(value, json!({ "status": "Error", "error": "Mail transporter not ready." }));
}

#[tokio::test]
async fn cors_preflight_is_allowed() {
  let app = create_app(SharedAppState::without_transport());

  let response = app
    .oneshot(
      Request::builder()
        .method(http::Method::OPTIONS)
        .uri("/send-bulk-mail")
        .header("origin", "https://frontend.example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(
    response.headers().get("access-control-allow-origin").unwrap(),
    "*"
  );
}
