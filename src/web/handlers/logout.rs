//! Logout handler.

use axum::response::{IntoResponse, Redirect};

use crate::web::routes::LOGIN_PATH;
use crate::web::session::Session;

/// Clears the session and returns to the login page.
///
/// # Endpoint
///
/// `POST /logout`
///
/// Idempotent: with no session it still clears the cookie and redirects.
/// Nothing is sent to the authentication provider.
pub async fn logout_handler(session: Session) -> impl IntoResponse {
    if session.is_authenticated() {
        tracing::info!("Session cleared");
    }

    (session.clear(), Redirect::to(LOGIN_PATH))
}
