use argon2::password_hash::SaltString;
use argon2::{
  Algorithm, Argon2, Params, Version,
  password_hash::{
    PasswordHash as Argon2PasswordHash, PasswordHasher as Argon2PasswordHasherTrait,
    PasswordVerifier,
  },
};
use async_trait::async_trait;

use crate::domain::auth::errors::{AuthError, HashError};
use crate::domain::auth::ports::PasswordComparer;

/// Argon2id password comparer
///
/// Uses the Argon2id algorithm with:
/// - Memory cost: 19 MiB (19456 KiB)
/// - Time cost: 2 iterations
/// - Parallelism: 1 thread
pub struct Argon2PasswordComparer {
  argon2: Argon2<'static>,
}

impl Argon2PasswordComparer {
  /// Creates a new Argon2PasswordComparer with the default parameters
  pub fn new() -> Result<Self, AuthError> {
    let memory_cost = 19456;
    let time_cost = 2;
    let parallelism = 1;
    let output_len = Some(32);

    let params = Params::new(memory_cost, time_cost, parallelism, output_len).map_err(|e| {
      AuthError::Hash(HashError::HashingFailed(format!(
        "Failed to create Argon2 params: {}",
        e
      )))
    })?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    Ok(Self { argon2 })
  }

  /// Hashes a plain text password into a PHC string
  ///
  /// Used when provisioning users; the login flow only compares.
  pub fn hash(&self, password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut rand::rngs::OsRng);

    let hash = self
      .argon2
      .hash_password(password.as_bytes(), &salt)
      .map_err(|e| {
        AuthError::Hash(HashError::HashingFailed(format!(
          "Failed to hash password: {}",
          e
        )))
      })?;

    Ok(hash.to_string())
  }
}

#[async_trait]
impl PasswordComparer for Argon2PasswordComparer {
  /// Verifies a plain text password against a stored Argon2 hash
  ///
  /// # Returns
  /// * `Ok(true)` - If the password matches
  /// * `Ok(false)` - If the password does not match
  /// * `Err(AuthError)` - If the stored hash cannot be parsed
  async fn compare(&self, plain: &str, hashed: &str) -> Result<bool, AuthError> {
    let parsed_hash = Argon2PasswordHash::new(hashed).map_err(HashError::from)?;

    // verify_password compares in constant time
    match self.argon2.verify_password(plain.as_bytes(), &parsed_hash) {
      Ok(_) => Ok(true),
      Err(argon2::password_hash::Error::Password) => Ok(false),
      Err(e) => Err(AuthError::Hash(HashError::VerificationFailed(format!(
        "Password verification failed: {}",
        e
      )))),
    }
  }
}
