use axum::{extract::DefaultBodyLimit, middleware, routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::{
  domains::submission::{form::FORM_SIZE_LIMIT, rest::submission_routes},
  middleware::cors::cors_headers,
  models::Message,
  state::SharedAppState,
};

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", any(hello_crema_handler))
    .merge(submission_routes())
    .layer(DefaultBodyLimit::max(FORM_SIZE_LIMIT))
    .with_state(state)
    .layer(middleware::from_fn(cors_headers))
    .layer(TraceLayer::new_for_http())
}

pub async fn hello_crema_handler() -> Message {
  Message::ok("Hello, Crema!")
}
