//! HTML rendering handlers for the login and weather pages.

mod login;
mod logout;
mod weather;

pub use login::{LoginForm, login_page_handler, login_submit_handler};
pub use logout::logout_handler;
pub use weather::{weather_page_handler, weather_snapshot_handler};

use askama::Template;
use axum::response::Html;
use serde_json::json;

use crate::error::AppError;

/// Renders `template` to an HTML body.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the template fails to render.
pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| {
        tracing::error!(error = %e, "Template rendering failed");
        AppError::internal("Failed to render page", json!({}))
    })
}
