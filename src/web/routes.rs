//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    login_page_handler, login_submit_handler, logout_handler, weather_page_handler,
    weather_snapshot_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Login page; also the redirect target for unauthenticated requests.
pub const LOGIN_PATH: &str = "/";

/// Root of the protected path family.
pub const WEATHER_PATH: &str = "/weather";

/// Card fragment loaded by the weather page.
pub const SNAPSHOT_PATH: &str = "/weather/snapshot";

/// Returns true for `/weather` and any path below `/weather/`.
pub fn is_protected_path(path: &str) -> bool {
    path == WEATHER_PATH
        || path
            .strip_prefix(WEATHER_PATH)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET  /`       - Login page (redirects to `/weather` when a session exists)
/// - `POST /logout` - Clear the session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(LOGIN_PATH, get(login_page_handler))
        .route("/logout", post(logout_handler))
}

/// Credential submission, kept separate so it can carry its own rate limit.
///
/// # Endpoints
///
/// - `POST /login` - Submit email and password
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login_submit_handler))
}

/// Protected routes requiring a session.
///
/// Guarded by [`crate::web::middleware::web_auth`] at the router level and
/// again by each handler.
///
/// # Endpoints
///
/// - `GET /weather`          - Weather page shell
/// - `GET /weather/snapshot` - Weather card fragment
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(WEATHER_PATH, get(weather_page_handler))
        .route(SNAPSHOT_PATH, get(weather_snapshot_handler))
}
