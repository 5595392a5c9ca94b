use async_trait::async_trait;
use reqwest::Url;

use crate::config::ProviderConfig;
use crate::relay::types::{RelayError, RelayMessage};

#[async_trait]
pub trait Mailer: Send + Sync {
  /// Posts the message to the provider and returns its raw response body.
  async fn send(&self, message: &RelayMessage) -> Result<String, RelayError>;
}

pub struct RelayClient {
  provider: ProviderConfig,
  http: reqwest::Client,
}

impl RelayClient {
  pub fn new(provider: ProviderConfig) -> Self {
    Self::with_client(provider, reqwest::Client::new())
  }

  pub fn with_client(provider: ProviderConfig, http: reqwest::Client) -> Self {
    RelayClient { provider, http }
  }

  fn endpoint(&self) -> Result<Url, RelayError> {
    Url::parse(&self.provider.endpoint()).map_err(|e| RelayError::Endpoint(e.to_string()))
  }
}

#[async_trait]
impl Mailer for RelayClient {
  async fn send(&self, message: &RelayMessage) -> Result<String, RelayError> {
    let endpoint = self.endpoint()?;

    // The provider's status code is not inspected; its body is handed back verbatim.
    let response = self
      .http
      .post(endpoint)
      .form(message)
      .send()
      .await
      .map_err(|e| RelayError::Send(e.without_url().to_string()))?;

    tracing::info!("Mail provider answered with {}", response.status());

    response
      .text()
      .await
      .map_err(|e| RelayError::Response(e.without_url().to_string()))
  }
}
