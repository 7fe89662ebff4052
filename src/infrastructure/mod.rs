//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Authentication and weather API clients over `reqwest`

pub mod http;
