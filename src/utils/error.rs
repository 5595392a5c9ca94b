use axum::response::{IntoResponse, Response};

use crate::models::Message;

pub const INVALID_EMAIL: &str = "Email in incorrect format.";
pub const UNREADABLE_FORM: &str = "Could not read form.";
pub const TEMPLATE_FAILED: &str = "Could not parse template..";
pub const PROVIDER_SETTINGS_FAILED: &str = "Could not load mail provider settings.";
pub const SEND_FAILED: &str = "Could not send email.";
pub const PROVIDER_RESPONSE_FAILED: &str = "There was an error sending the email.";

/// Request-level failure. Always rendered as a `status: error` envelope with HTTP 200.
#[derive(Debug)]
pub struct AppError {
  pub message: String,
}

impl AppError {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
    }
  }

  pub fn invalid_email() -> Self {
    Self::new(INVALID_EMAIL)
  }

  pub fn unreadable_form() -> Self {
    Self::new(UNREADABLE_FORM)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    Message::error(self.message).into_response()
  }
}

impl From<crate::domains::submission::service::SubmissionServiceError> for AppError {
  fn from(error: crate::domains::submission::service::SubmissionServiceError) -> Self {
    use crate::domains::submission::service::SubmissionServiceError;
    tracing::error!("Submission failed: {}", error);
    match error {
      SubmissionServiceError::Template(_) => AppError::new(TEMPLATE_FAILED),
      SubmissionServiceError::Relay(relay) => AppError::from(relay),
    }
  }
}

impl From<crate::relay::RelayError> for AppError {
  fn from(error: crate::relay::RelayError) -> Self {
    use crate::relay::RelayError;
    match error {
      RelayError::Endpoint(_) => AppError::new(PROVIDER_SETTINGS_FAILED),
      RelayError::Send(_) => AppError::new(SEND_FAILED),
      RelayError::Response(_) => AppError::new(PROVIDER_RESPONSE_FAILED),
    }
  }
}
