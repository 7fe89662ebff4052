//! Business logic services for the application layer.

pub mod auth_service;
pub mod weather_service;

pub use auth_service::AuthService;
pub use weather_service::WeatherService;
