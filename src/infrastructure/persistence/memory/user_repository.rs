use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::{AccessTokenUpdater, UserLoader},
  value_objects::{AccessToken, UserId},
};

/// In-memory user store keyed by lowercased email
#[derive(Default, Clone)]
pub struct InMemoryUserRepository {
  users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts or replaces the user registered under `user.email`
  pub async fn insert(&self, user: User) {
    let mut users = self.users.write().await;
    users.insert(user.email.to_lowercase(), user);
  }

  /// Returns the user stored under `id`
  pub async fn find_by_id(&self, id: &UserId) -> Option<User> {
    let users = self.users.read().await;
    users.values().find(|user| &user.id == id).cloned()
  }
}

#[async_trait]
impl UserLoader for InMemoryUserRepository {
  async fn load(&self, email: &str) -> Result<Option<User>, AuthError> {
    let users = self.users.read().await;
    Ok(users.get(&email.to_lowercase()).cloned())
  }
}

#[async_trait]
impl AccessTokenUpdater for InMemoryUserRepository {
  async fn update(&self, user_id: &UserId, token: &AccessToken) -> Result<(), AuthError> {
    let mut users = self.users.write().await;
    let user = users
      .values_mut()
      .find(|user| &user.id == user_id)
      .ok_or(RepositoryError::NotFound)?;

    user.access_token = Some(token.as_str().to_string());
    Ok(())
  }
}
