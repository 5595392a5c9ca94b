//! Outbound relay to a form-POST transactional mail API.
//!
//! The provider is addressed as `{protocol}{api_key}@{url}`; credentials in the
//! URL authority are sent as HTTP basic auth.

mod service;
mod types;

pub use service::{Mailer, RelayClient};
pub use types::{RelayError, RelayMessage};
