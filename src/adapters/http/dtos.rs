use serde::{Deserialize, Serialize};

/// Request body for user login
///
/// Both fields are optional on the wire so that missing values reach the
/// router and are reported as missing parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
  #[serde(default)]
  pub email: Option<String>,

  #[serde(default)]
  pub password: Option<String>,
}

impl LoginRequest {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: Some(email.into()),
      password: Some(password.into()),
    }
  }
}

/// Response after successful user login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
  #[serde(rename = "accessToken")]
  pub access_token: String,
}

/// Standard error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Human-readable error message
  pub error: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_login_request_missing_fields_default_to_none() {
    let request: LoginRequest = serde_json::from_str(r#"{"password": "any"}"#).unwrap();

    assert!(request.email.is_none());
    assert_eq!(request.password.as_deref(), Some("any"));
  }

  #[test]
  fn test_login_response_uses_camel_case_token() {
    let response = LoginResponse {
      access_token: "valid_token".to_string(),
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json, serde_json::json!({ "accessToken": "valid_token" }));
  }
}
