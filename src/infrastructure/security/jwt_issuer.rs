use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::domain::auth::errors::{AuthError, TokenError};
use crate::domain::auth::ports::TokenIssuer;
use crate::domain::auth::value_objects::{AccessToken, UserId};

/// Claims carried by issued access tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
}

/// HS256 JWT token issuer
///
/// Tokens carry only the subject, so the same user id always yields the
/// same token for a given secret.
pub struct JwtTokenIssuer {
  encoding_key: EncodingKey,
}

impl JwtTokenIssuer {
  /// Creates a new issuer signing with `secret`
  ///
  /// # Errors
  /// Returns `TokenError::InvalidKey` if the secret is empty
  pub fn new(secret: &str) -> Result<Self, AuthError> {
    if secret.is_empty() {
      return Err(TokenError::InvalidKey.into());
    }

    Ok(Self {
      encoding_key: EncodingKey::from_secret(secret.as_bytes()),
    })
  }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
  async fn generate(&self, user_id: &UserId) -> Result<AccessToken, AuthError> {
    let claims = Claims {
      sub: user_id.as_str().to_string(),
    };

    let token = encode(&Header::default(), &claims, &self.encoding_key)
      .map_err(|e| TokenError::SigningFailed(e.to_string()))?;

    Ok(AccessToken::new(token))
  }
}
