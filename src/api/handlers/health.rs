//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, UpstreamInfo, Upstreams};
use crate::state::AppState;

/// Returns service status and the upstreams it is configured against.
///
/// # Endpoint
///
/// `GET /health`
///
/// Always `200 OK`. The upstreams are not contacted; `upstreams` echoes
/// configuration only.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "upstreams": {
///     "auth_provider": { "host": "api.escuelajs.co" },
///     "weather_provider": { "host": "api.openweathermap.org", "location": "Moscow" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstreams: Upstreams {
            auth_provider: UpstreamInfo {
                host: state.auth_service.upstream(),
                location: None,
            },
            weather_provider: UpstreamInfo {
                host: state.weather_service.upstream(),
                location: Some(state.weather_service.city().to_string()),
            },
        },
    })
}
