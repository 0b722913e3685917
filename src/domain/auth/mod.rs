pub mod entities;
pub mod errors;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use entities::User;
pub use errors::{AuthError, DependencyError, HashError, RepositoryError, TokenError};
pub use ports::{
  AccessTokenUpdater, Authenticator, EmailValidator, PasswordComparer, TokenIssuer, UserLoader,
};
pub use value_objects::{AccessToken, UserId};
