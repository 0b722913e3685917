use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::{AccessTokenUpdater, UserLoader},
  value_objects::{AccessToken, UserId},
};

/// PostgreSQL implementation of the user store
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Inserts a user, used when provisioning accounts
  pub async fn insert(&self, user: &User) -> Result<(), AuthError> {
    sqlx::query(
      r#"
            INSERT INTO users (id, email, password_hash, access_token)
            VALUES (CAST($1 AS UUID), $2, $3, $4)
            "#,
    )
    .bind(user.id.as_str())
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.access_token.as_deref())
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to insert user: {}", e);
      AuthError::from(e)
    })?;

    Ok(())
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: String,
  email: String,
  password_hash: String,
  access_token: Option<String>,
}

impl From<UserRow> for User {
  fn from(row: UserRow) -> Self {
    User::from_db(
      UserId::new(row.id),
      row.email,
      row.password_hash,
      row.access_token,
    )
  }
}

#[async_trait]
impl UserLoader for PostgresUserRepository {
  async fn load(&self, email: &str) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            SELECT id::text AS id, email, password_hash, access_token
            FROM users
            WHERE LOWER(email) = LOWER($1)
            "#,
    )
    .bind(email)
    .fetch_optional(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to load user by email: {}", e);
      AuthError::from(e)
    })?;

    Ok(row.map(User::from))
  }
}

#[async_trait]
impl AccessTokenUpdater for PostgresUserRepository {
  async fn update(&self, user_id: &UserId, token: &AccessToken) -> Result<(), AuthError> {
    let result = sqlx::query(
      r#"
            UPDATE users
            SET access_token = $2, updated_at = NOW()
            WHERE id = CAST($1 AS UUID)
            "#,
    )
    .bind(user_id.as_str())
    .bind(token.as_str())
    .execute(&self.pool)
    .await
    .map_err(|e| {
      tracing::error!("Failed to update access token: {}", e);
      AuthError::from(e)
    })?;

    if result.rows_affected() == 0 {
      return Err(RepositoryError::NotFound.into());
    }

    Ok(())
  }
}
