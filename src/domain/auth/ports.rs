use async_trait::async_trait;

use super::entities::User;
use super::errors::AuthError;
use super::value_objects::{AccessToken, UserId};

/// Loads user records by email
#[async_trait]
pub trait UserLoader: Send + Sync {
  /// Returns `None` when no user is registered under `email`
  async fn load(&self, email: &str) -> Result<Option<User>, AuthError>;
}

/// Persists the access token issued to a user
#[async_trait]
pub trait AccessTokenUpdater: Send + Sync {
  async fn update(&self, user_id: &UserId, token: &AccessToken) -> Result<(), AuthError>;
}

/// Compares a plain text password against a stored hash
#[async_trait]
pub trait PasswordComparer: Send + Sync {
  /// `Ok(false)` on mismatch; `Err` only when the comparison itself failed
  async fn compare(&self, plain: &str, hashed: &str) -> Result<bool, AuthError>;
}

/// Issues access tokens for authenticated users
#[async_trait]
pub trait TokenIssuer: Send + Sync {
  async fn generate(&self, user_id: &UserId) -> Result<AccessToken, AuthError>;
}

/// Checks that an email address is well formed
#[async_trait]
pub trait EmailValidator: Send + Sync {
  async fn is_valid(&self, email: &str) -> Result<bool, AuthError>;
}

/// Authenticates credentials, yielding an access token on success
///
/// `Ok(None)` means the credentials did not match a user.
#[async_trait]
pub trait Authenticator: Send + Sync {
  async fn authenticate(
    &self,
    email: &str,
    password: &str,
  ) -> Result<Option<AccessToken>, AuthError>;
}
