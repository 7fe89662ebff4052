//! Failures of the two upstream collaborators.
//!
//! Both error types separate a rejection by the upstream (a non-2xx status)
//! from a request that never produced a usable answer. The two cases carry
//! different messages for the user.

use thiserror::Error;

/// Shown when the authentication endpoint rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Неверный логин или пароль";

/// Shown when the authentication endpoint cannot be reached.
pub const AUTH_CONNECTION_MESSAGE: &str = "Ошибка подключения к серверу";

/// Shown when the weather endpoint answers with an error status.
pub const WEATHER_REJECTED_MESSAGE: &str = "Ошибка получения данных о погоде";

/// Shown when the weather endpoint cannot be reached.
pub const WEATHER_CONNECTION_MESSAGE: &str = "Ошибка подключения к сервису погоды";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Any non-2xx answer. The status is kept for logging only.
    #[error("authentication rejected with status {status}")]
    Rejected { status: u16 },
    #[error("authentication request failed: {0}")]
    Transport(String),
    #[error("unexpected authentication response: {0}")]
    Decode(String),
}

impl AuthError {
    /// Message displayed inline on the login form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => INVALID_CREDENTIALS_MESSAGE,
            Self::Transport(_) | Self::Decode(_) => AUTH_CONNECTION_MESSAGE,
        }
    }
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request rejected with status {status}")]
    Rejected { status: u16 },
    #[error("weather request failed: {0}")]
    Transport(String),
    #[error("unexpected weather response: {0}")]
    Decode(String),
}

impl WeatherError {
    /// Message displayed in place of the weather card.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => WEATHER_REJECTED_MESSAGE,
            Self::Transport(_) | Self::Decode(_) => WEATHER_CONNECTION_MESSAGE,
        }
    }
}
