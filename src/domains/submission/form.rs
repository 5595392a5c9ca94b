use axum::{
  extract::{FromRequest, Multipart, Request},
  http::{header::CONTENT_TYPE, HeaderValue},
  Form,
};

use super::model::FormFields;
use crate::AppError;

/// Ceiling on a submitted form body, `(1 << 10) * 24` bytes.
pub const FORM_SIZE_LIMIT: usize = (1 << 10) * 24;

/// Reads text fields from a multipart or url-encoded body.
///
/// File parts are skipped. Bodies of any other content type carry no fields.
pub async fn read_form(request: Request) -> Result<FormFields, AppError> {
  let content_type = request
    .headers()
    .get(CONTENT_TYPE)
    .and_then(|value| value.to_str().ok())
    .unwrap_or_default()
    .to_ascii_lowercase();

  if content_type.starts_with("multipart/form-data") {
    read_multipart(request).await
  } else if content_type.starts_with("application/x-www-form-urlencoded") {
    // Media types are case-insensitive but `Form` matches the header exactly.
    let (mut parts, body) = request.into_parts();
    parts.headers.insert(
      CONTENT_TYPE,
      HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    let request = Request::from_parts(parts, body);

    let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
      .await
      .map_err(|e| {
        tracing::warn!("Rejected url-encoded form: {}", e);
        AppError::unreadable_form()
      })?;
    Ok(pairs.into_iter().collect())
  } else {
    Ok(FormFields::new())
  }
}

async fn read_multipart(request: Request) -> Result<FormFields, AppError> {
  let mut multipart = Multipart::from_request(request, &()).await.map_err(|e| {
    tracing::warn!("Rejected multipart form: {}", e);
    AppError::unreadable_form()
  })?;

  let mut fields = FormFields::new();
  while let Some(field) = multipart.next_field().await.map_err(|e| {
    tracing::warn!("Malformed multipart field: {}", e);
    AppError::unreadable_form()
  })? {
    if field.file_name().is_some() {
      continue;
    }
    let Some(name) = field.name().map(str::to_owned) else {
      continue;
    };
    let value = field.text().await.map_err(|e| {
      tracing::warn!("Unreadable multipart field {}: {}", name, e);
      AppError::unreadable_form()
    })?;
    fields.push(name, value);
  }

  Ok(fields)
}
