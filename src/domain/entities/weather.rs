//! Weather report as returned upstream and the snapshot shown to the user.

use serde::Deserialize;

use crate::domain::errors::WeatherError;

/// Parameters of the single location the service reports on.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub city: String,
    pub units: String,
    pub lang: String,
}

/// Raw current-weather payload from the upstream API.
///
/// Only the fields the page displays are deserialized; everything else in
/// the response is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    pub wind: Wind,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// The set of fields rendered on the weather page.
///
/// Built from one [`WeatherReport`]; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub wind_speed: f64,
    pub description: String,
    pub icon: String,
}

impl WeatherSnapshot {
    /// Temperature rounded to the nearest whole degree.
    pub fn temperature_rounded(&self) -> i64 {
        round_half_up(self.temperature)
    }

    /// Feels-like temperature rounded to the nearest whole degree.
    pub fn feels_like_rounded(&self) -> i64 {
        round_half_up(self.feels_like)
    }

    /// Resolves the icon image URL by substituting `{icon}` in `template`.
    pub fn icon_url(&self, template: &str) -> String {
        template.replace("{icon}", &self.icon)
    }
}

impl TryFrom<WeatherReport> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(report: WeatherReport) -> Result<Self, Self::Error> {
        let condition = report
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Decode("response has no weather conditions".to_string()))?;

        Ok(Self {
            location: report.name,
            temperature: report.main.temp,
            feels_like: report.main.feels_like,
            humidity: report.main.humidity,
            wind_speed: report.wind.speed,
            description: condition.description,
            icon: condition.icon,
        })
    }
}

/// Rounds to the nearest integer, with exact halves going toward positive infinity.
///
/// `21.5` becomes `22`, `-0.5` becomes `0` and `0.49999999999999994`
/// becomes `0`.
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
