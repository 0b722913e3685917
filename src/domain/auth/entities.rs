use serde::{Deserialize, Serialize};

use super::value_objects::UserId;

/// User record as seen by the authentication flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id: UserId,
  pub email: String,
  pub password_hash: String,
  /// Last access token issued to this user
  pub access_token: Option<String>,
}

impl User {
  /// Creates a new user with a generated id and no token yet
  pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
    Self {
      id: UserId::generate(),
      email: email.into(),
      password_hash: password_hash.into(),
      access_token: None,
    }
  }

  /// Reconstructs a user from storage
  pub fn from_db(
    id: UserId,
    email: String,
    password_hash: String,
    access_token: Option<String>,
  ) -> Self {
    Self {
      id,
      email,
      password_hash,
      access_token,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_user_has_no_token() {
    let user = User::new("valid_email@mail.com", "hashed_password");

    assert_eq!(user.email, "valid_email@mail.com");
    assert_eq!(user.password_hash, "hashed_password");
    assert!(user.access_token.is_none());
    assert!(!user.id.as_str().is_empty());
  }
}
