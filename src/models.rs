use axum::{
  http::{header, HeaderValue, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use serde::{Deserialize, Serialize};

pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  Ok,
  Error,
}

/// Envelope returned for every request, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
  pub status: Status,
  #[serde(rename = "message")]
  pub body: String,
}

impl Message {
  pub fn ok(body: impl Into<String>) -> Self {
    Self {
      status: Status::Ok,
      body: body.into(),
    }
  }

  pub fn error(body: impl Into<String>) -> Self {
    Self {
      status: Status::Error,
      body: body.into(),
    }
  }
}

impl IntoResponse for Message {
  // Failures are reported through `status`, never through the HTTP status code.
  fn into_response(self) -> Response {
    let mut response = (StatusCode::OK, Json(self)).into_response();
    response
      .headers_mut()
      .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    response
  }
}
