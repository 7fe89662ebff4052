use std::sync::Arc;

use crate::application::services::{AuthService, WeatherService};
use crate::web::session::SessionSettings;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub weather_service: Arc<WeatherService>,
    pub session: SessionSettings,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        weather_service: Arc<WeatherService>,
        session: SessionSettings,
    ) -> Self {
        Self {
            auth_service,
            weather_service,
            session,
        }
    }
}
