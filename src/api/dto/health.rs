//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub upstreams: Upstreams,
}

/// Upstreams the service is configured against. Reported from configuration,
/// not probed.
#[derive(Debug, Serialize)]
pub struct Upstreams {
    pub auth_provider: UpstreamInfo,
    pub weather_provider: UpstreamInfo,
}

#[derive(Debug, Serialize)]
pub struct UpstreamInfo {
    pub host: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}
