//! Application layer services implementing business logic.
//!
//! Services consume the provider traits from [`crate::domain::providers`]
//! and give HTTP handlers a narrow API.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential submission
//! - [`services::weather_service::WeatherService`] - Snapshot for the configured location

pub mod services;
