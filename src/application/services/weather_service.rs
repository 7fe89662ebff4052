//! Weather service for the protected page.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{WeatherQuery, WeatherSnapshot};
use crate::domain::errors::WeatherError;
use crate::domain::providers::WeatherProvider;

/// Service that fetches the snapshot for the configured location.
///
/// Every call goes to the provider; results are never cached.
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    query: WeatherQuery,
    icon_url_template: String,
}

impl WeatherService {
    /// Creates a new weather service.
    ///
    /// # Arguments
    ///
    /// - `provider` - upstream weather API
    /// - `query` - the fixed location, units and language
    /// - `icon_url_template` - icon image URL containing an `{icon}` placeholder
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        query: WeatherQuery,
        icon_url_template: String,
    ) -> Self {
        Self {
            provider,
            query,
            icon_url_template,
        }
    }

    /// Fetches the current snapshot with a single upstream request.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`WeatherError`], or [`WeatherError::Decode`]
    /// if the report carries no weather condition.
    pub async fn current(&self) -> Result<WeatherSnapshot, WeatherError> {
        let report = self
            .provider
            .current_weather(&self.query)
            .await
            .inspect_err(|e| warn!(city = %self.query.city, error = %e, "Weather fetch failed"))?;

        let snapshot = WeatherSnapshot::try_from(report)?;
        debug!(city = %self.query.city, temp = snapshot.temperature, "Weather fetched");

        Ok(snapshot)
    }

    /// Resolves the icon image URL for a snapshot.
    pub fn icon_url(&self, snapshot: &WeatherSnapshot) -> String {
        snapshot.icon_url(&self.icon_url_template)
    }

    /// The configured location name.
    pub fn city(&self) -> &str {
        &self.query.city
    }

    /// Description of the configured upstream.
    pub fn upstream(&self) -> String {
        self.provider.describe()
    }
}
