pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod login_router;
pub mod middleware;
pub mod routes;

// Re-export commonly used types
pub use dtos::{ErrorResponse, LoginRequest, LoginResponse};
pub use errors::ApiError;
pub use handlers::auth::login_handler;
pub use login_router::{
  LoginRouter, LoginRouterDependencies, ResolvedLoginRouterDependencies, ResponseBody,
  RouterRequest, RouterResponse,
};
pub use middleware::security_headers;
pub use routes::{configure_app, configure_login_routes};
