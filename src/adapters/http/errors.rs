use thiserror::Error;

use super::dtos::ErrorResponse;
use crate::domain::auth::errors::AuthError;

/// Errors the login endpoint reports to clients
///
/// `Internal` deliberately carries no detail; the cause is logged where the
/// error is created.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
  /// Required parameter absent (400 Bad Request)
  #[error("Missing param: {0}")]
  MissingParam(String),

  /// Parameter present but malformed (400 Bad Request)
  #[error("Invalid param: {0}")]
  InvalidParam(String),

  /// Request body exceeded the payload limit (413 Payload Too Large)
  #[error("Payload too large")]
  PayloadTooLarge,

  /// Credentials did not match (401 Unauthorized)
  #[error("Unauthorized")]
  Unauthorized,

  /// Any internal fault (500 Internal Server Error)
  #[error("Internal error")]
  Internal,
}

impl ApiError {
  pub fn status_code(&self) -> u16 {
    match self {
      ApiError::MissingParam(_) | ApiError::InvalidParam(_) => 400,
      ApiError::Unauthorized => 401,
      ApiError::PayloadTooLarge => 413,
      ApiError::Internal => 500,
    }
  }

  /// Logs `cause` and returns the generic internal error
  pub fn internal(cause: impl std::fmt::Display) -> Self {
    tracing::error!("Internal error: {}", cause);
    ApiError::Internal
  }

  pub fn to_response(&self) -> ErrorResponse {
    ErrorResponse {
      error: self.to_string(),
    }
  }
}

/// Parameter errors keep their 400 meaning, everything else is internal
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::MissingParameter(name) => ApiError::MissingParam(name),
      AuthError::InvalidParameter(name) => ApiError::InvalidParam(name),
      other => ApiError::internal(other),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::errors::RepositoryError;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(ApiError::MissingParam("email".to_string()).status_code(), 400);
    assert_eq!(ApiError::InvalidParam("email".to_string()).status_code(), 400);
    assert_eq!(ApiError::Unauthorized.status_code(), 401);
    assert_eq!(ApiError::PayloadTooLarge.status_code(), 413);
    assert_eq!(ApiError::Internal.status_code(), 500);
  }

  #[test]
  fn test_internal_hides_cause() {
    let error = ApiError::internal("connection refused at 10.0.0.1");

    assert_eq!(error.to_response().error, "Internal error");
  }

  #[test]
  fn test_messages() {
    assert_eq!(
      ApiError::MissingParam("password".to_string()).to_string(),
      "Missing param: password"
    );
    assert_eq!(ApiError::Unauthorized.to_string(), "Unauthorized");
  }

  #[test]
  fn test_from_auth_error_keeps_parameter_errors() {
    assert_eq!(
      ApiError::from(AuthError::missing_parameter("email")),
      ApiError::MissingParam("email".to_string())
    );
    assert_eq!(
      ApiError::from(AuthError::invalid_parameter("email")),
      ApiError::InvalidParam("email".to_string())
    );
    assert_eq!(
      ApiError::from(AuthError::from(RepositoryError::NotFound)),
      ApiError::Internal
    );
  }
}
