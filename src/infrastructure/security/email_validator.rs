use async_trait::async_trait;
use validator::ValidateEmail;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::ports::EmailValidator;

/// Email format checker backed by the `validator` crate (HTML5 rules)
#[derive(Debug, Clone, Default)]
pub struct ValidatorEmailValidator;

impl ValidatorEmailValidator {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl EmailValidator for ValidatorEmailValidator {
  async fn is_valid(&self, email: &str) -> Result<bool, AuthError> {
    Ok(email.validate_email())
  }
}
