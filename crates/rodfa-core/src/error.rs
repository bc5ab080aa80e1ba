//! Error taxonomy for a single lookup attempt.
//!
//! Every variant is terminal for the attempt: the workflow returns to an
//! editable state showing the reason, and the user recovers by resubmitting.

use thiserror::Error;

/// Fixed message shown when the request could not complete at all.
pub const TRANSPORT_MESSAGE: &str = "Не удалось связаться с сервером";

/// Fallback for a non-success response that carries no `error` body.
pub const NOT_FOUND_FALLBACK: &str = "Информация по данному номеру не найдена";

/// Shown when a success response does not satisfy the record shape. No raw
/// parse diagnostics reach the user.
pub const MALFORMED_MESSAGE: &str = "Сервер вернул некорректный ответ";

/// Why a submitted lookup failed.
///
/// `Display` (below) is the English diagnostic used in logs;
/// [`LookupError::user_message`] is what the search screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
  /// The service answered with a non-success status.
  #[error("service error: {message}")]
  Service { message: String },

  /// The request never completed (DNS, connection, timeout).
  #[error("transport error")]
  Transport,

  /// Success status, but the body does not satisfy the record shape.
  #[error("malformed response body")]
  Malformed,
}

impl LookupError {
  /// The display string carried into the `Failed` state.
  pub fn user_message(&self) -> String {
    match self {
      Self::Service { message } => message.clone(),
      Self::Transport => TRANSPORT_MESSAGE.to_string(),
      Self::Malformed => MALFORMED_MESSAGE.to_string(),
    }
  }
}
