use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loginkeep::{
  adapters::http::{LoginRouter, LoginRouterDependencies, configure_app, security_headers},
  application::auth::{AuthUseCase, AuthUseCaseDependencies},
  domain::auth::ports::{AccessTokenUpdater, UserLoader},
  infrastructure::{
    config::{Config, DatabaseConfig, StorageBackend},
    persistence::{memory::InMemoryUserRepository, postgres::PostgresUserRepository},
    security::{Argon2PasswordComparer, JwtTokenIssuer, ValidatorEmailValidator},
  },
};

/// User store shared by the loader and updater slots
struct UserStore {
  loader: Arc<dyn UserLoader>,
  updater: Arc<dyn AccessTokenUpdater>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loginkeep=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting loginkeep");

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  let store = match config.storage.backend {
    StorageBackend::Postgres => {
      let database = config
        .database
        .as_ref()
        .context("storage.backend = \"postgres\" requires a [database] section")?;
      connect_postgres(database).await?
    }
    StorageBackend::Memory => {
      tracing::warn!("Using in-memory user store, data is lost on restart");
      let repo = Arc::new(InMemoryUserRepository::new());
      UserStore {
        loader: repo.clone(),
        updater: repo,
      }
    }
  };

  // Initialize security services
  let password_comparer =
    Arc::new(Argon2PasswordComparer::new().context("Failed to create password comparer")?);
  let token_issuer = Arc::new(
    JwtTokenIssuer::new(&config.security.token_secret).context("Failed to create token issuer")?,
  );
  let email_validator = Arc::new(ValidatorEmailValidator::new());

  let auth_use_case = Arc::new(AuthUseCase::new(AuthUseCaseDependencies::new(
    store.loader,
    store.updater,
    password_comparer,
    token_issuer,
  )));

  let login_router = Arc::new(LoginRouter::new(LoginRouterDependencies::new(
    auth_use_case,
    email_validator,
  )));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      .wrap(security_headers())
      .wrap(Logger::default())
      .configure(|cfg| configure_app(cfg, login_router.clone()))
  })
  .bind((server_host.as_str(), server_port))
  .with_context(|| format!("Failed to bind {}:{}", server_host, server_port))?
  .run()
  .await?;

  Ok(())
}

async fn connect_postgres(database: &DatabaseConfig) -> anyhow::Result<UserStore> {
  tracing::info!("Connecting to database");

  let db_pool = tokio::time::timeout(
    Duration::from_secs(database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(database.max_connections)
      .acquire_timeout(Duration::from_secs(database.acquire_timeout_seconds))
      .connect(&database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      database.connect_timeout_seconds
    );
    anyhow::anyhow!(
      "Database connection timed out after {} seconds",
      database.connect_timeout_seconds
    )
  })?
  .context("Could not connect to database")?;

  tracing::info!("Database connection pool created");

  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .context("Failed to run database migrations")?;
  tracing::info!("Database migrations completed");

  let repo = Arc::new(PostgresUserRepository::new(db_pool));
  Ok(UserStore {
    loader: repo.clone(),
    updater: repo,
  })
}
