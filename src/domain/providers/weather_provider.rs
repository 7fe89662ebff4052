//! Provider trait for the current-weather endpoint.

use async_trait::async_trait;

use crate::domain::entities::{WeatherQuery, WeatherReport};
use crate::domain::errors::WeatherError;

/// Fetches the current weather for one location.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpWeatherProvider`] - OpenWeatherMap-style API via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Issues exactly one request for `query`.
    ///
    /// # Errors
    ///
    /// - [`WeatherError::Rejected`] for any non-2xx status
    /// - [`WeatherError::Transport`] if the request could not complete
    /// - [`WeatherError::Decode`] if the body does not match [`WeatherReport`]
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError>;

    /// Human-readable description of the upstream, used by the health check.
    fn describe(&self) -> String;
}
