use std::{
  path::Path,
  sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
  body::Body,
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::{ProviderConfig, Settings, DEFAULT_SENDER, DEFAULT_SUBJECT},
  models::Message,
  relay::{Mailer, RelayError, RelayMessage},
  state::SharedAppState,
};

/// Records every message and answers with a canned provider reply.
#[derive(Clone)]
pub struct FakeMailer {
  reply: String,
  sent: Arc<Mutex<Vec<RelayMessage>>>,
}

impl FakeMailer {
  pub fn replying(reply: &str) -> Self {
    Self {
      reply: reply.to_string(),
      sent: Arc::new(Mutex::new(Vec::new())),
    }
  }

  pub fn sent(&self) -> Vec<RelayMessage> {
    self.sent.lock().expect("mailer lock").clone()
  }
}

#[async_trait]
impl Mailer for FakeMailer {
  async fn send(&self, message: &RelayMessage) -> Result<String, RelayError> {
    self.sent.lock().expect("mailer lock").push(message.clone());
    Ok(self.reply.clone())
  }
}

pub fn test_settings(template_path: impl AsRef<Path>) -> Settings {
  Settings {
    port: 0,
    provider: ProviderConfig {
      protocol: "http://api:".to_string(),
      api_key: "secret".to_string(),
      url: "127.0.0.1:9/messages".to_string(),
      from: DEFAULT_SENDER.to_string(),
      subject: DEFAULT_SUBJECT.to_string(),
    },
    template_path: template_path.as_ref().to_path_buf(),
  }
}

pub fn app_with_mailer(mailer: FakeMailer, template_path: impl AsRef<Path>) -> Router {
  let state = SharedAppState::with_mailer(mailer, &test_settings(template_path));
  create_app(state)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Message) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  let message = serde_json::from_slice(&body).expect("deserialize message");
  (status, headers, message)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Message) {
  let request = Request::builder()
    .method("GET")
    .uri(uri)
    .body(Body::empty())
    .expect("build request");
  send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, HeaderMap, Message) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/x-www-form-urlencoded")
    .body(Body::from(body.to_string()))
    .expect("build request");
  send(app, request).await
}

pub async fn send_form(
  app: Router,
  method: &str,
  uri: &str,
  content_type: &str,
  body: impl Into<Body>,
) -> (StatusCode, HeaderMap, Message) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", content_type)
    .body(body.into())
    .expect("build request");
  send(app, request).await
}

pub fn multipart_body(boundary: &str, fields: &[(&str, &str)]) -> String {
  let mut body = String::new();
  for (name, value) in fields {
    body.push_str(&format!(
      "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
      boundary, name, value
    ));
  }
  body.push_str(&format!("--{}--\r\n", boundary));
  body
}
