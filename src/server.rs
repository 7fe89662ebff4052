//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound HTTP client, upstream providers and services, then
//! runs the Axum server until Ctrl+C or SIGTERM.

use crate::application::services::{AuthService, WeatherService};
use crate::config::Config;
use crate::domain::entities::WeatherQuery;
use crate::infrastructure::http::{HttpAuthProvider, HttpWeatherProvider};
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::session::SessionSettings;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared `reqwest` client (one connection pool for both upstreams)
/// - Authentication and weather providers and services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - An upstream URL is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = app_router(state, config.login_rate_limit)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wires providers and services from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or an upstream URL is invalid.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let auth_provider = Arc::new(HttpAuthProvider::new(
        client.clone(),
        config.auth_endpoint()?,
    ));
    let weather_provider = Arc::new(HttpWeatherProvider::new(
        client,
        config.weather_endpoint()?,
        config.weather_api_key.clone(),
    ));

    let query = WeatherQuery {
        city: config.weather_city.clone(),
        units: config.weather_units.clone(),
        lang: config.weather_lang.clone(),
    };

    let auth_service = Arc::new(AuthService::new(auth_provider));
    let weather_service = Arc::new(WeatherService::new(
        weather_provider,
        query,
        config.weather_icon_url.clone(),
    ));

    let session = SessionSettings::new(
        config.session_cookie_name.clone(),
        config.session_cookie_secure,
    );

    Ok(AppState::new(auth_service, weather_service, session))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
