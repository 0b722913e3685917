use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// UserId Value Object
// ============================================================================

/// Opaque user identifier as stored by the user store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// Creates a fresh random identifier
  pub fn generate() -> Self {
    Self(uuid::Uuid::new_v4().to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl From<&str> for UserId {
  fn from(id: &str) -> Self {
    Self::new(id)
  }
}

// ============================================================================
// AccessToken Value Object
// ============================================================================

/// Access token handed to the client after a successful login
///
/// The core never looks inside it; the issuer decides the format.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }
}

// Tokens are credentials, keep them out of logs
impl fmt::Debug for AccessToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("AccessToken(***)")
  }
}

impl AsRef<str> for AccessToken {
  fn as_ref(&self) -> &str {
    &self.0
  }
}
