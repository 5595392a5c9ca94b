use axum::{
  extract::{Query, Request},
  http::{
    header::{
      ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_EXPOSE_HEADERS, ORIGIN,
    },
    HeaderMap, HeaderName, HeaderValue,
  },
  middleware::Next,
  response::Response,
};

pub const EXPOSE_HEADERS_PARAM: &str = "access-control-expose-headers";
pub const AMP_SOURCE_ORIGIN_PARAM: &str = "__amp_source_origin";

/// Query parameters that drive the exposed-header behavior used by AMP forms.
#[derive(Debug, Default)]
pub struct ExposeQuery {
  pub expose: Vec<String>,
  pub amp_source_origins: Vec<String>,
}

impl ExposeQuery {
  pub fn from_request(request: &Request) -> Self {
    let Ok(Query(pairs)) = Query::<Vec<(String, String)>>::try_from_uri(request.uri()) else {
      return Self::default();
    };

    let mut query = Self::default();
    for (key, value) in pairs {
      match key.as_str() {
        EXPOSE_HEADERS_PARAM => query.expose.push(value),
        AMP_SOURCE_ORIGIN_PARAM => query.amp_source_origins.push(value),
        _ => {}
      }
    }
    query
  }
}

/// Adds the credentialed CORS headers to every response.
pub async fn cors_headers(request: Request, next: Next) -> Response {
  let origin = request
    .headers()
    .get(ORIGIN)
    .filter(|origin| !origin.is_empty())
    .cloned();
  let query = ExposeQuery::from_request(&request);

  let mut response = next.run(request).await;
  apply_cors_headers(response.headers_mut(), origin, &query);
  response
}

pub fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<HeaderValue>, query: &ExposeQuery) {
  headers.insert(ACCESS_CONTROL_ALLOW_CREDENTIALS, HeaderValue::from_static("true"));

  if let Some(origin) = origin {
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
  }

  if query.expose.is_empty() {
    return;
  }

  headers.remove(ACCESS_CONTROL_EXPOSE_HEADERS);
  for name in &query.expose {
    match HeaderValue::from_str(name) {
      Ok(value) => {
        headers.append(ACCESS_CONTROL_EXPOSE_HEADERS, value);
      }
      Err(_) => tracing::debug!("Skipping unrepresentable expose header {:?}", name),
    }
  }

  let origins: Vec<HeaderValue> = query
    .amp_source_origins
    .iter()
    .filter_map(|origin| HeaderValue::from_str(origin).ok())
    .collect();

  // Each exposed header carries the AMP source origins; with none given, the header is dropped.
  for name in &query.expose {
    let Ok(name) = HeaderName::from_bytes(name.as_bytes()) else {
      continue;
    };
    headers.remove(&name);
    for origin in &origins {
      headers.append(name.clone(), origin.clone());
    }
  }
}
