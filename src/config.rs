//! Process settings, read once at startup from the environment or a JSON file.

use std::{
  env, fmt,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_SENDER: &str = "crema@koostudios.com";
pub const DEFAULT_SUBJECT: &str = "New submission";
pub const DEFAULT_TEMPLATE_PATH: &str = "email.tmpl";

#[derive(Clone, Deserialize)]
pub struct ProviderConfig {
  pub protocol: String,
  #[serde(rename = "api-key")]
  pub api_key: String,
  pub url: String,
  #[serde(default = "default_sender")]
  pub from: String,
  #[serde(default = "default_subject")]
  pub subject: String,
}

fn default_sender() -> String {
  DEFAULT_SENDER.to_string()
}

fn default_subject() -> String {
  DEFAULT_SUBJECT.to_string()
}

impl ProviderConfig {
  /// `{protocol}{api_key}@{url}`, e.g. `https://api:` + `key-123` + `@` + `api.mailgun.net/v3/mg.example.com/messages`.
  pub fn endpoint(&self) -> String {
    format!("{}{}@{}", self.protocol, self.api_key, self.url)
  }

  pub fn from_env() -> Result<Self> {
    Ok(Self {
      protocol: env::var("PROTOCOL").context("PROTOCOL must be set")?,
      api_key: env::var("APIKEY").context("APIKEY must be set")?,
      url: env::var("URL").context("URL must be set")?,
      from: env::var("SENDER").unwrap_or_else(|_| default_sender()),
      subject: env::var("SUBJECT").unwrap_or_else(|_| default_subject()),
    })
  }

  pub fn from_file(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config = serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
  }
}

impl fmt::Debug for ProviderConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ProviderConfig")
      .field("protocol", &self.protocol)
      .field("api_key", &"[redacted]")
      .field("url", &self.url)
      .field("from", &self.from)
      .field("subject", &self.subject)
      .finish()
  }
}

#[derive(Debug, Clone)]
pub struct Settings {
  pub port: u16,
  pub provider: ProviderConfig,
  pub template_path: PathBuf,
}

impl Settings {
  /// `PORT` always comes from the environment. Provider settings come from the
  /// JSON file named by `CONFIG_FILE` when it is set, otherwise from the environment.
  pub fn load() -> Result<Self> {
    let port = env::var("PORT")
      .context("$PORT must be set")?
      .parse()
      .context("$PORT must be a valid port number")?;

    let provider = match env::var("CONFIG_FILE") {
      Ok(path) => ProviderConfig::from_file(Path::new(&path))?,
      Err(_) => ProviderConfig::from_env()?,
    };

    let template_path = env::var("TEMPLATE_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_PATH));

    Ok(Self {
      port,
      provider,
      template_path,
    })
  }
}
