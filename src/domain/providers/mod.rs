//! Traits for the external collaborators the service talks to.
//!
//! Implementations live in `crate::infrastructure::http`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod auth_provider;
pub mod weather_provider;

pub use auth_provider::AuthProvider;
pub use weather_provider::WeatherProvider;

#[cfg(test)]
pub use auth_provider::MockAuthProvider;
#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
