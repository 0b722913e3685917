mod argon2_hasher;
mod email_validator;
mod jwt_issuer;

pub use argon2_hasher::Argon2PasswordComparer;
pub use email_validator::ValidatorEmailValidator;
pub use jwt_issuer::{Claims, JwtTokenIssuer};
