use std::path::PathBuf;

use minijinja::{context, AutoEscape, Environment};

use super::model::FormFields;

/// HTML email body template, read from disk on every render so edits apply without a restart.
///
/// The template sees `email`, `fields` (ordered `{name, value}` pairs) and `form`
/// (field name to list of values). Output is HTML-escaped.
#[derive(Debug, Clone)]
pub struct EmailTemplate {
  path: PathBuf,
}

impl EmailTemplate {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub async fn render(&self, email: &str, fields: &FormFields) -> Result<String, String> {
    let source = tokio::fs::read_to_string(&self.path)
      .await
      .map_err(|e| format!("Failed to read {}: {}", self.path.display(), e))?;

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_: &str| AutoEscape::Html);
    env
      .add_template("email", &source)
      .map_err(|e| format!("Invalid template {}: {}", self.path.display(), e))?;

    env
      .get_template("email")
      .and_then(|template| {
        template.render(context! {
          email => email,
          fields => fields,
          form => fields.grouped(),
        })
      })
      .map_err(|e| format!("Failed to render {}: {}", self.path.display(), e))
  }
}
