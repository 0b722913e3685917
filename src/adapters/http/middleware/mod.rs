pub mod cors;

pub use cors::security_headers;
