//! Login page and credential submission handlers.

use askama::Template;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::Credentials;
use crate::domain::errors::AuthError;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::routes::WEATHER_PATH;
use crate::web::session::Session;

use super::render;

/// Fields posted by the login form.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Template for the login page.
///
/// Renders `templates/login.html` with:
/// - Email and password inputs (both `required`)
/// - Demo credential hints
/// - Inline error message from the previous attempt, if any
///
/// The submit button is disabled in the browser while a submission is in
/// flight; the server always renders it enabled.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub email: String,
    pub error: Option<&'static str>,
    pub is_loading: bool,
}

impl LoginTemplate {
    fn empty() -> Self {
        Self {
            email: String::new(),
            error: None,
            is_loading: false,
        }
    }

    fn failed(email: String, error: &'static str) -> Self {
        Self {
            email,
            error: Some(error),
            is_loading: false,
        }
    }
}

/// Renders the login page, or skips it when a session already exists.
///
/// # Endpoint
///
/// `GET /`
///
/// # Responses
///
/// - **303 See Other** to `/weather` if the session holds a token
/// - **200 OK** with the login form otherwise
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the page fails to render.
pub async fn login_page_handler(session: Session) -> Result<Response, AppError> {
    if session.is_authenticated() {
        return Ok(Redirect::to(WEATHER_PATH).into_response());
    }

    Ok(render(&LoginTemplate::empty())?.into_response())
}

/// Submits credentials to the authentication provider.
///
/// # Endpoint
///
/// `POST /login` (form-encoded `email`, `password`)
///
/// # Flow
///
/// 1. If the session already holds a token, go straight to `/weather`
/// 2. Send `{email, password}` as JSON to the provider, once
/// 3. On success, store the returned token in the session and redirect
/// 4. On failure, re-render the form with the entered email and an error
///
/// # Responses
///
/// - **303 See Other** to `/weather` with `Set-Cookie` on success
/// - **401 Unauthorized** with the form and "invalid credentials" message
///   when the provider answers with any non-2xx status
/// - **502 Bad Gateway** with the form and "connection failure" message
///   when the provider cannot be reached or returns no token
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the form body cannot be parsed and
/// [`AppError::Internal`] if the re-rendered form fails to render.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, AppError> {
    if session.is_authenticated() {
        return Ok(Redirect::to(WEATHER_PATH).into_response());
    }

    let Form(form) = form.map_err(|e| {
        AppError::bad_request("Invalid login form", json!({"reason": e.body_text()}))
    })?;

    let credentials = Credentials::new(form.email, form.password);

    match state.auth_service.login(&credentials).await {
        Ok(token) => Ok((session.write(&token), Redirect::to(WEATHER_PATH)).into_response()),
        Err(e) => {
            let status = match e {
                AuthError::Rejected { .. } => StatusCode::UNAUTHORIZED,
                AuthError::Transport(_) | AuthError::Decode(_) => StatusCode::BAD_GATEWAY,
            };
            let page = LoginTemplate::failed(credentials.email, e.user_message());

            Ok((status, render(&page)?).into_response())
        }
    }
}
