//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `WEATHER_API_KEY` - OpenWeatherMap access key
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `AUTH_API_URL` - Login endpoint (default: `https://api.escuelajs.co/api/v1/auth/login`)
//! - `WEATHER_API_URL` - Weather endpoint (default: `https://api.openweathermap.org/data/2.5/weather`)
//! - `WEATHER_CITY` - Location name sent as `q` (default: `Moscow`)
//! - `WEATHER_UNITS` - Units sent as `units` (default: `metric`)
//! - `WEATHER_LANG` - Language sent as `lang` (default: `ru`)
//! - `WEATHER_ICON_URL` - Icon URL template with an `{icon}` placeholder
//!   (default: `https://openweathermap.org/img/wn/{icon}@2x.png`)
//! - `SESSION_COOKIE_NAME` - Name of the session cookie (default: `authToken`)
//! - `SESSION_COOKIE_SECURE` - Mark the session cookie `Secure` (default: `false`)
//! - `LOGIN_RATE_LIMIT` - Per-IP rate limit on login submissions (default: `true`)
//!
//! ```bash
//! export WEATHER_API_KEY="..."
//! export WEATHER_CITY="Saint Petersburg"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use url::Url;

pub const DEFAULT_AUTH_API_URL: &str = "https://api.escuelajs.co/api/v1/auth/login";
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_WEATHER_ICON_URL: &str = "https://openweathermap.org/img/wn/{icon}@2x.png";
pub const DEFAULT_SESSION_COOKIE_NAME: &str = "authToken";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub auth_api_url: String,
    pub weather_api_url: String,
    /// Loaded from `WEATHER_API_KEY`. Must be non-empty.
    pub weather_api_key: String,
    pub weather_city: String,
    pub weather_units: String,
    pub weather_lang: String,
    pub weather_icon_url: String,
    pub session_cookie_name: String,
    /// Set this behind HTTPS so the browser only returns the cookie over TLS.
    pub session_cookie_secure: bool,
    pub login_rate_limit: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WEATHER_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;

        Ok(Self {
            listen_addr: var_or("LISTEN", "0.0.0.0:3000"),
            log_level: var_or("RUST_LOG", "info"),
            log_format: var_or("LOG_FORMAT", "text"),
            auth_api_url: var_or("AUTH_API_URL", DEFAULT_AUTH_API_URL),
            weather_api_url: var_or("WEATHER_API_URL", DEFAULT_WEATHER_API_URL),
            weather_api_key,
            weather_city: var_or("WEATHER_CITY", "Moscow"),
            weather_units: var_or("WEATHER_UNITS", "metric"),
            weather_lang: var_or("WEATHER_LANG", "ru"),
            weather_icon_url: var_or("WEATHER_ICON_URL", DEFAULT_WEATHER_ICON_URL),
            session_cookie_name: var_or("SESSION_COOKIE_NAME", DEFAULT_SESSION_COOKIE_NAME),
            session_cookie_secure: flag_or("SESSION_COOKIE_SECURE", false),
            login_rate_limit: flag_or("LOGIN_RATE_LIMIT", true),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a socket address
    /// - either upstream URL is not an absolute `http`/`https` URL
    /// - the API key, city, units or language is empty
    /// - the icon URL template has no `{icon}` placeholder
    /// - the cookie name is empty or contains characters outside `[A-Za-z0-9_-]`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        parse_http_url("AUTH_API_URL", &self.auth_api_url)?;
        parse_http_url("WEATHER_API_URL", &self.weather_api_url)?;

        if self.weather_api_key.trim().is_empty() {
            anyhow::bail!("WEATHER_API_KEY must not be empty");
        }

        if self.weather_city.trim().is_empty() {
            anyhow::bail!("WEATHER_CITY must not be empty");
        }

        if self.weather_units.is_empty() || self.weather_lang.is_empty() {
            anyhow::bail!("WEATHER_UNITS and WEATHER_LANG must not be empty");
        }

        if !self.weather_icon_url.contains("{icon}") {
            anyhow::bail!(
                "WEATHER_ICON_URL must contain an '{{icon}}' placeholder, got '{}'",
                self.weather_icon_url
            );
        }

        if self.session_cookie_name.is_empty()
            || !self
                .session_cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "SESSION_COOKIE_NAME must be non-empty and use only [A-Za-z0-9_-], got '{}'",
                self.session_cookie_name
            );
        }

        Ok(())
    }

    /// Parsed authentication endpoint. Call after [`Config::validate`].
    pub fn auth_endpoint(&self) -> Result<Url> {
        parse_http_url("AUTH_API_URL", &self.auth_api_url)
    }

    /// Parsed weather endpoint. Call after [`Config::validate`].
    pub fn weather_endpoint(&self) -> Result<Url> {
        parse_http_url("WEATHER_API_URL", &self.weather_api_url)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Auth API: {}", self.auth_api_url);
        tracing::info!("  Weather API: {}", self.weather_api_url);
        tracing::info!("  Weather API key: {}", mask_secret(&self.weather_api_key));
        tracing::info!(
            "  Location: {} (units: {}, lang: {})",
            self.weather_city,
            self.weather_units,
            self.weather_lang
        );
        tracing::info!(
            "  Session cookie: {} (secure: {})",
            self.session_cookie_name,
            self.session_cookie_secure
        );
        tracing::info!(
            "  Login rate limit: {}",
            if self.login_rate_limit { "enabled" } else { "disabled" }
        );
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn flag_or(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

fn parse_http_url(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must use http or https, got '{value}'");
    }

    Ok(url)
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `433206afd7aaf0e3` → `4332***`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
