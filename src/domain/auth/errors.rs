use thiserror::Error;

/// Main authentication error type
///
/// Unauthorized is not represented here: a missing user or a wrong password is
/// a successful call returning `None`.
#[derive(Debug, Error)]
pub enum AuthError {
  #[error("Missing param: {0}")]
  MissingParameter(String),

  #[error("Invalid param: {0}")]
  InvalidParameter(String),

  #[error("Dependency error: {0}")]
  Dependency(#[from] DependencyError),

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),

  #[error("Hash error: {0}")]
  Hash(#[from] HashError),

  #[error("Token error: {0}")]
  Token(#[from] TokenError),

  #[error("Validation error: {0}")]
  Validation(String),
}

impl AuthError {
  pub fn missing_parameter(name: impl Into<String>) -> Self {
    AuthError::MissingParameter(name.into())
  }

  pub fn invalid_parameter(name: impl Into<String>) -> Self {
    AuthError::InvalidParameter(name.into())
  }
}

/// Raised when a component is asked to run with an incomplete collaborator set
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DependencyError {
  #[error("Missing collaborator: {0}")]
  Missing(&'static str),
}

/// Repository-related errors
#[derive(Debug, Error)]
pub enum RepositoryError {
  #[error("Database connection failed: {0}")]
  ConnectionFailed(String),

  #[error("Query execution failed: {0}")]
  QueryFailed(String),

  #[error("Record not found")]
  NotFound,

  #[error("Database error: {0}")]
  DatabaseError(String),
}

/// Password hashing and verification errors
#[derive(Debug, Error)]
pub enum HashError {
  #[error("Failed to hash password: {0}")]
  HashingFailed(String),

  #[error("Failed to verify password: {0}")]
  VerificationFailed(String),

  #[error("Invalid hash format")]
  InvalidFormat,
}

/// Access token issuing errors
#[derive(Debug, Error)]
pub enum TokenError {
  #[error("Failed to sign token: {0}")]
  SigningFailed(String),

  #[error("Invalid signing key")]
  InvalidKey,
}

impl From<sqlx::Error> for RepositoryError {
  fn from(error: sqlx::Error) -> Self {
    match error {
      sqlx::Error::RowNotFound => RepositoryError::NotFound,
      sqlx::Error::Database(db_err) => RepositoryError::DatabaseError(db_err.message().to_string()),
      sqlx::Error::PoolTimedOut => RepositoryError::ConnectionFailed("Pool timed out".to_string()),
      sqlx::Error::PoolClosed => RepositoryError::ConnectionFailed("Pool closed".to_string()),
      _ => RepositoryError::QueryFailed(error.to_string()),
    }
  }
}

impl From<sqlx::Error> for AuthError {
  fn from(error: sqlx::Error) -> Self {
    AuthError::Repository(RepositoryError::from(error))
  }
}

impl From<argon2::password_hash::Error> for HashError {
  fn from(error: argon2::password_hash::Error) -> Self {
    use argon2::password_hash::Error;
    match error {
      Error::PhcStringField | Error::PhcStringTrailingData => HashError::InvalidFormat,
      _ => HashError::VerificationFailed(error.to_string()),
    }
  }
}
