use axum::{
  extract::{rejection::PathRejection, Path, Request, State},
  routing::get,
  Router,
};
use validator::Validate;

use super::{form::read_form, model::EmailPath};
use crate::{
  models::Message,
  state::{AppState, SharedAppState},
  AppError,
};

pub fn submission_routes() -> Router<SharedAppState> {
  // Every method other than GET submits, as POST does.
  Router::new().route(
    "/{email}",
    get(reminder_handler).post(submit_handler).fallback(submit_handler),
  )
}

fn validated_email(path: Result<Path<EmailPath>, PathRejection>) -> Result<String, AppError> {
  let Path(path) = path.map_err(|_| AppError::invalid_email())?;
  path.validate().map_err(|_| AppError::invalid_email())?;
  Ok(path.email)
}

pub async fn reminder_handler(path: Result<Path<EmailPath>, PathRejection>) -> Result<Message, AppError> {
  let email = validated_email(path)?;
  Ok(Message::ok(format!(
    "Thanks for using our service, {}. Please make sure your form has the method=POST attribute",
    email
  )))
}

pub async fn submit_handler(
  State(state): State<SharedAppState>,
  path: Result<Path<EmailPath>, PathRejection>,
  request: Request,
) -> Result<Message, AppError> {
  let email = validated_email(path)?;
  let fields = read_form(request).await?;

  state.submit(&email, fields).await.map(Message::ok).map_err(Into::into)
}
