use async_trait::async_trait;
use std::error::Error;

use super::{model::FormFields, template::EmailTemplate};
use crate::relay::{Mailer, RelayError, RelayMessage};

#[derive(Debug)]
pub enum SubmissionServiceError {
  Template(String),
  Relay(RelayError),
}

impl Error for SubmissionServiceError {}

impl std::fmt::Display for SubmissionServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SubmissionServiceError::Template(msg) => write!(f, "Template Error: {}", msg),
      SubmissionServiceError::Relay(err) => write!(f, "Relay Error: {}", err),
    }
  }
}

impl From<RelayError> for SubmissionServiceError {
  fn from(err: RelayError) -> Self {
    SubmissionServiceError::Relay(err)
  }
}

#[async_trait]
pub trait SubmissionService: Send + Sync {
  /// Renders `fields` into the email body and relays it to `email`, returning the provider's raw reply.
  async fn submit(&self, email: &str, fields: FormFields) -> Result<String, SubmissionServiceError>;
}

pub struct SubmissionServiceImpl<M> {
  mailer: M,
  template: EmailTemplate,
  from: String,
  subject: String,
}

impl<M> SubmissionServiceImpl<M>
where
  M: Mailer,
{
  pub fn new(mailer: M, template: EmailTemplate, from: String, subject: String) -> Self {
    Self {
      mailer,
      template,
      from,
      subject,
    }
  }
}

#[async_trait]
impl<M> SubmissionService for SubmissionServiceImpl<M>
where
  M: Mailer,
{
  async fn submit(&self, email: &str, fields: FormFields) -> Result<String, SubmissionServiceError> {
    let html = self
      .template
      .render(email, &fields)
      .await
      .map_err(SubmissionServiceError::Template)?;

    let message = RelayMessage::new(self.from.clone(), email.to_string(), self.subject.clone(), html);
    let reply = self.mailer.send(&message).await?;

    tracing::info!("Relayed {} form fields to {}", fields.len(), email);
    Ok(reply)
  }
}
