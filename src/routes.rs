//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                 - Login page (public)
//! - `POST /login`            - Credential submission (public, rate limited)
//! - `POST /logout`           - Clear session (public)
//! - `GET  /weather`          - Weather page (session required)
//! - `GET  /weather/snapshot` - Weather card fragment (session required)
//! - `GET  /health`           - Service status (public)
//! - `/static/*`              - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Route guard** - Redirects `/weather` and below to `/` without a session cookie
//! - **Rate limiting** - Per-IP token bucket on `POST /login`
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `login_rate_limit` - when `true`, `POST /login` is rate limited per peer
///   IP; the router must then be served with connect info
///
/// # Errors
///
/// Returns an error if the rate limiter cannot be built.
pub fn router(state: AppState, login_rate_limit: bool) -> anyhow::Result<Router> {
    let login = web::routes::login_routes();
    let login = if login_rate_limit {
        login.layer(rate_limit::login_layer()?)
    } else {
        login
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web::routes::public_routes())
        .merge(login)
        .merge(web::routes::protected_routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ))
        .layer(tracing::layer())
        .with_state(state);

    Ok(router)
}

/// Constructs the application router with trailing-slash normalization.
///
/// # Errors
///
/// Returns an error if the rate limiter cannot be built.
pub fn app_router(state: AppState, login_rate_limit: bool) -> anyhow::Result<NormalizePath<Router>> {
    let router = router(state, login_rate_limit)?;
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
