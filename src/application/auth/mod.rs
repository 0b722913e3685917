//! Authentication use cases
//!
//! This module contains the use case that checks credentials and issues
//! access tokens.

mod authenticate_user;

pub use authenticate_user::{AuthUseCase, AuthUseCaseDependencies, ResolvedAuthDependencies};
