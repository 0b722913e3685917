//! Application layer
//!
//! Use cases that orchestrate the domain ports. They depend only on traits
//! from `domain`, never on concrete infrastructure.

pub mod auth;
