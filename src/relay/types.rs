use std::error::Error;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayMessage {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub html: String,
}

impl RelayMessage {
  pub fn new(from: String, to: String, subject: String, html: String) -> Self {
    RelayMessage { from, to, subject, html }
  }
}

#[derive(Debug)]
pub enum RelayError {
  Endpoint(String),
  Send(String),
  Response(String),
}

impl Error for RelayError {}

impl std::fmt::Display for RelayError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RelayError::Endpoint(msg) => write!(f, "Invalid provider endpoint: {}", msg),
      RelayError::Send(msg) => write!(f, "Provider request failed: {}", msg),
      RelayError::Response(msg) => write!(f, "Provider response unreadable: {}", msg),
    }
  }
}
