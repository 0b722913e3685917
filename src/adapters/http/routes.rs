use actix_web::web;
use std::sync::Arc;

use super::handlers::auth::login_handler;
use super::login_router::LoginRouter;

/// Configure login routes
///
/// Mounts the login endpoint under the provided scope (e.g. `/api`).
///
/// # Routes
///
/// - POST /login - Exchange email and password for an access token
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use loginkeep::adapters::http::{LoginRouter, configure_login_routes};
///
/// # fn example(router: Arc<LoginRouter>) {
/// let app = App::new().service(
///   web::scope("/api").configure(|cfg| configure_login_routes(cfg, router.clone())),
/// );
/// # }
/// ```
pub fn configure_login_routes(cfg: &mut web::ServiceConfig, router: Arc<LoginRouter>) {
  cfg
    .app_data(web::Data::new(router))
    .route("/login", web::post().to(login_handler));
}

/// Configure the whole application: `/api` routes and the health check
pub fn configure_app(cfg: &mut web::ServiceConfig, router: Arc<LoginRouter>) {
  cfg
    .service(web::scope("/api").configure(|cfg| configure_login_routes(cfg, router)))
    .route("/health", web::get().to(health_check));
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
