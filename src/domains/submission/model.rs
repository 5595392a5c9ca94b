use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmailPath {
  #[validate(email)]
  pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
  pub name: String,
  pub value: String,
}

/// Submitted fields in the order they arrived. Names may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormFields(Vec<FormField>);

impl FormFields {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
    self.0.push(FormField {
      name: name.into(),
      value: value.into(),
    });
  }

  pub fn iter(&self) -> impl Iterator<Item = &FormField> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// All values per field name, keyed alphabetically.
  pub fn grouped(&self) -> BTreeMap<&str, Vec<&str>> {
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for field in &self.0 {
      grouped.entry(field.name.as_str()).or_default().push(field.value.as_str());
    }
    grouped
  }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FormFields {
  fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
    let mut fields = FormFields::new();
    for (name, value) in iter {
      fields.push(name, value);
    }
    fields
  }
}
