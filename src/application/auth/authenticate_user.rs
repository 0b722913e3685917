use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::auth::errors::{AuthError, DependencyError};
use crate::domain::auth::ports::{
  AccessTokenUpdater, Authenticator, PasswordComparer, TokenIssuer, UserLoader,
};
use crate::domain::auth::value_objects::AccessToken;

/// Collaborators of [`AuthUseCase`]
///
/// Every slot is optional so that an incomplete set can be assembled; the use
/// case refuses to run until all four are present.
#[derive(Clone, Default)]
pub struct AuthUseCaseDependencies {
  pub user_loader: Option<Arc<dyn UserLoader>>,
  pub token_updater: Option<Arc<dyn AccessTokenUpdater>>,
  pub password_comparer: Option<Arc<dyn PasswordComparer>>,
  pub token_issuer: Option<Arc<dyn TokenIssuer>>,
}

impl AuthUseCaseDependencies {
  /// Creates a complete dependency set
  pub fn new(
    user_loader: Arc<dyn UserLoader>,
    token_updater: Arc<dyn AccessTokenUpdater>,
    password_comparer: Arc<dyn PasswordComparer>,
    token_issuer: Arc<dyn TokenIssuer>,
  ) -> Self {
    Self {
      user_loader: Some(user_loader),
      token_updater: Some(token_updater),
      password_comparer: Some(password_comparer),
      token_issuer: Some(token_issuer),
    }
  }

  /// Checks that every collaborator is present
  ///
  /// # Errors
  /// Returns `DependencyError::Missing` naming the first empty slot
  pub fn validate(&self) -> Result<ResolvedAuthDependencies<'_>, DependencyError> {
    Ok(ResolvedAuthDependencies {
      user_loader: self
        .user_loader
        .as_deref()
        .ok_or(DependencyError::Missing("user_loader"))?,
      token_updater: self
        .token_updater
        .as_deref()
        .ok_or(DependencyError::Missing("token_updater"))?,
      password_comparer: self
        .password_comparer
        .as_deref()
        .ok_or(DependencyError::Missing("password_comparer"))?,
      token_issuer: self
        .token_issuer
        .as_deref()
        .ok_or(DependencyError::Missing("token_issuer"))?,
    })
  }
}

/// A dependency set that passed validation
pub struct ResolvedAuthDependencies<'a> {
  pub user_loader: &'a dyn UserLoader,
  pub token_updater: &'a dyn AccessTokenUpdater,
  pub password_comparer: &'a dyn PasswordComparer,
  pub token_issuer: &'a dyn TokenIssuer,
}

/// Use case for authenticating a user by email and password
///
/// On success a fresh access token is issued and stored against the user.
pub struct AuthUseCase {
  dependencies: AuthUseCaseDependencies,
}

impl AuthUseCase {
  /// Creates a new instance of AuthUseCase
  pub fn new(dependencies: AuthUseCaseDependencies) -> Self {
    Self { dependencies }
  }

  /// Executes the authentication use case
  ///
  /// # Arguments
  /// * `email` - The user's email address
  /// * `password` - The user's plain text password
  ///
  /// # Returns
  /// `Some(token)` when the credentials match a user, `None` otherwise
  ///
  /// # Errors
  /// * `AuthError::MissingParameter` if email or password is empty
  /// * `AuthError::Dependency` if a collaborator is missing
  /// * Any error raised by a collaborator, unchanged
  #[tracing::instrument(
    name = "AuthUseCase::execute",
    skip_all,
    fields(user_id = tracing::field::Empty)
  )]
  pub async fn execute(
    &self,
    email: &str,
    password: &str,
  ) -> Result<Option<AccessToken>, AuthError> {
    if email.is_empty() {
      return Err(AuthError::missing_parameter("email"));
    }
    if password.is_empty() {
      return Err(AuthError::missing_parameter("password"));
    }

    let deps = self.dependencies.validate()?;

    let Some(user) = deps.user_loader.load(email).await? else {
      tracing::debug!("No user registered for email");
      return Ok(None);
    };
    tracing::Span::current().record("user_id", tracing::field::display(&user.id));

    if !deps
      .password_comparer
      .compare(password, &user.password_hash)
      .await?
    {
      tracing::debug!("Password mismatch");
      return Ok(None);
    }

    let token = deps.token_issuer.generate(&user.id).await?;
    deps.token_updater.update(&user.id, &token).await?;

    tracing::info!("User authenticated");
    Ok(Some(token))
  }
}

#[async_trait]
impl Authenticator for AuthUseCase {
  async fn authenticate(
    &self,
    email: &str,
    password: &str,
  ) -> Result<Option<AccessToken>, AuthError> {
    self.execute(email, password).await
  }
}
