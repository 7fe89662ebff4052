//! HTTP client for the OpenWeatherMap current-weather endpoint.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::entities::{WeatherQuery, WeatherReport};
use crate::domain::errors::WeatherError;
use crate::domain::providers::WeatherProvider;

/// Weather provider speaking the OpenWeatherMap `data/2.5/weather` API.
///
/// The access key is sent as the `appid` query parameter. No timeout is set
/// on the request.
pub struct HttpWeatherProvider {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl HttpWeatherProvider {
    /// Creates a provider sharing the given connection pool.
    pub fn new(client: Client, endpoint: Url, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl WeatherProvider for HttpWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", query.units.as_str()),
                ("lang", query.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), city = %query.city, "Weather endpoint responded");

        if !status.is_success() {
            return Err(WeatherError::Rejected {
                status: status.as_u16(),
            });
        }

        response
            .json::<WeatherReport>()
            .await
            .map_err(|e| WeatherError::Decode(e.to_string()))
    }

    fn describe(&self) -> String {
        self.endpoint.host_str().unwrap_or("unknown").to_string()
    }
}
