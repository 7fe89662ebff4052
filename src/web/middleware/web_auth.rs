//! Cookie-presence guard for the protected path family.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::web::routes::{LOGIN_PATH, is_protected_path};
use crate::web::session::Session;

/// Redirects requests for protected paths to the login page when no session
/// cookie is present.
///
/// # Matched Paths
///
/// `/weather` and everything below `/weather/`, whether or not a route
/// exists for it. Other paths pass through untouched.
///
/// # Policy
///
/// Presence of a non-empty cookie is sufficient. The token is not checked
/// against the authentication provider, so a forged or stale cookie gets
/// through; handlers behind this layer repeat the same presence check on
/// their own.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::web::middleware::web_auth;
///
/// let app = Router::new()
///     .merge(web::routes::routes())
///     .layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
///
/// # Errors
///
/// Returns `Redirect` (303) to `/` if the path is protected and the
/// session cookie is missing or empty.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    if !is_protected_path(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let session = Session::from_headers(req.headers(), st.session.clone());

    if session.is_authenticated() {
        Ok(next.run(req).await)
    } else {
        tracing::debug!(path = %req.uri().path(), "No session cookie, redirecting to login");
        Err(Redirect::to(LOGIN_PATH))
    }
}
