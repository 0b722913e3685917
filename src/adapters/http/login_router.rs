//! Framework-independent login endpoint.
//!
//! [`LoginRouter`] turns a [`RouterRequest`] into a [`RouterResponse`]. It is
//! the only place where internal failures are converted into the generic 500
//! contract; the actix handler merely shuttles bytes in and out.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::auth::errors::{AuthError, DependencyError};
use crate::domain::auth::ports::{Authenticator, EmailValidator};
use crate::domain::auth::value_objects::AccessToken;

use super::dtos::{ErrorResponse, LoginRequest, LoginResponse};
use super::errors::ApiError;

/// Collaborators of [`LoginRouter`]
#[derive(Clone, Default)]
pub struct LoginRouterDependencies {
  pub authenticator: Option<Arc<dyn Authenticator>>,
  pub email_validator: Option<Arc<dyn EmailValidator>>,
}

impl LoginRouterDependencies {
  pub fn new(
    authenticator: Arc<dyn Authenticator>,
    email_validator: Arc<dyn EmailValidator>,
  ) -> Self {
    Self {
      authenticator: Some(authenticator),
      email_validator: Some(email_validator),
    }
  }

  /// Checks that both collaborators are present
  pub fn validate(&self) -> Result<ResolvedLoginRouterDependencies<'_>, DependencyError> {
    Ok(ResolvedLoginRouterDependencies {
      authenticator: self
        .authenticator
        .as_deref()
        .ok_or(DependencyError::Missing("authenticator"))?,
      email_validator: self
        .email_validator
        .as_deref()
        .ok_or(DependencyError::Missing("email_validator"))?,
    })
  }
}

/// A router dependency set that passed validation
pub struct ResolvedLoginRouterDependencies<'a> {
  pub authenticator: &'a dyn Authenticator,
  pub email_validator: &'a dyn EmailValidator,
}

/// Inbound login request
#[derive(Debug, Clone, Default)]
pub struct RouterRequest {
  pub body: Option<LoginRequest>,
}

impl RouterRequest {
  pub fn with_body(body: LoginRequest) -> Self {
    Self { body: Some(body) }
  }
}

/// Body of a [`RouterResponse`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
  Token(LoginResponse),
  Error(ErrorResponse),
}

/// Outbound login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterResponse {
  pub status_code: u16,
  pub body: ResponseBody,
}

impl RouterResponse {
  pub fn ok(token: AccessToken) -> Self {
    Self {
      status_code: 200,
      body: ResponseBody::Token(LoginResponse {
        access_token: token.into_inner(),
      }),
    }
  }

  /// Error message carried by the body, if any
  pub fn error_message(&self) -> Option<&str> {
    match &self.body {
      ResponseBody::Error(error) => Some(&error.error),
      ResponseBody::Token(_) => None,
    }
  }

  /// Access token carried by the body, if any
  pub fn access_token(&self) -> Option<&str> {
    match &self.body {
      ResponseBody::Token(token) => Some(&token.access_token),
      ResponseBody::Error(_) => None,
    }
  }
}

impl From<ApiError> for RouterResponse {
  fn from(error: ApiError) -> Self {
    Self {
      status_code: error.status_code(),
      body: ResponseBody::Error(error.to_response()),
    }
  }
}

/// Login endpoint: validates input, authenticates, and maps every outcome to
/// a status code
pub struct LoginRouter {
  dependencies: LoginRouterDependencies,
}

impl LoginRouter {
  pub fn new(dependencies: LoginRouterDependencies) -> Self {
    Self { dependencies }
  }

  /// Handles a login request
  ///
  /// Never fails: every error, including a missing request or collaborator,
  /// is folded into the response.
  #[tracing::instrument(name = "LoginRouter::route", skip_all)]
  pub async fn route(&self, request: Option<&RouterRequest>) -> RouterResponse {
    match self.try_route(request).await {
      Ok(token) => RouterResponse::ok(token),
      Err(error) => {
        tracing::debug!(status = error.status_code(), "Login rejected: {}", error);
        error.into()
      }
    }
  }

  async fn try_route(&self, request: Option<&RouterRequest>) -> Result<AccessToken, ApiError> {
    let body = request
      .and_then(|request| request.body.as_ref())
      .ok_or_else(|| ApiError::internal("login request without body"))?;

    let email = non_empty(&body.email).ok_or_else(|| AuthError::missing_parameter("email"))?;
    let password =
      non_empty(&body.password).ok_or_else(|| AuthError::missing_parameter("password"))?;

    let deps = self.dependencies.validate().map_err(ApiError::internal)?;

    if !deps
      .email_validator
      .is_valid(email)
      .await
      .map_err(ApiError::internal)?
    {
      return Err(AuthError::invalid_parameter("email").into());
    }

    match deps.authenticator.authenticate(email, password).await {
      Ok(Some(token)) => Ok(token),
      Ok(None) => Err(ApiError::Unauthorized),
      Err(error) => Err(ApiError::internal(error)),
    }
  }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
  value.as_deref().filter(|value| !value.is_empty())
}
