use std::sync::Arc;

use crate::{
  config::Settings,
  domains::submission::{
    model::FormFields,
    service::{SubmissionService, SubmissionServiceError, SubmissionServiceImpl},
    template::EmailTemplate,
  },
  relay::{Mailer, RelayClient},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit(
    &self,
    email: &str,
    fields: FormFields,
  ) -> impl std::future::Future<Output = Result<String, SubmissionServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub submission_service: Arc<dyn SubmissionService>,
}

impl SharedAppState {
  pub fn new(settings: &Settings) -> Self {
    let relay_client = RelayClient::new(settings.provider.clone());
    Self::with_mailer(relay_client, settings)
  }

  pub fn with_mailer<M>(mailer: M, settings: &Settings) -> Self
  where
    M: Mailer + 'static,
  {
    let submission_service: Arc<dyn SubmissionService> = Arc::new(SubmissionServiceImpl::new(
      mailer,
      EmailTemplate::new(settings.template_path.clone()),
      settings.provider.from.clone(),
      settings.provider.subject.clone(),
    ));

    Self { submission_service }
  }
}

impl AppState for SharedAppState {
  async fn submit(&self, email: &str, fields: FormFields) -> Result<String, SubmissionServiceError> {
    self.submission_service.submit(email, fields).await
  }
}
