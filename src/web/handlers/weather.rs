//! Protected weather page handlers.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Local;

use crate::domain::entities::WeatherSnapshot;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::date_ru::format_long_date;
use crate::web::routes::{LOGIN_PATH, SNAPSHOT_PATH};
use crate::web::session::Session;

use super::render;

/// Template for the weather page shell.
///
/// Renders `templates/weather.html` with:
/// - Header with logout button
/// - Loading indicator, replaced in the browser by the card from
///   `/weather/snapshot` once it arrives
/// - A plain link to the card for browsers without scripting
/// - Today's date in long Russian form
#[derive(Template)]
#[template(path = "weather.html")]
pub struct WeatherPageTemplate {
    pub today: String,
    pub snapshot_path: &'static str,
}

/// Weather card fragment with every displayed field pre-formatted.
#[derive(Template)]
#[template(path = "weather_card.html")]
pub struct WeatherCardTemplate {
    pub location: String,
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: u32,
    pub wind_speed: String,
    pub description: String,
    pub icon_url: String,
}

impl WeatherCardTemplate {
    pub fn new(snapshot: WeatherSnapshot, icon_url: String) -> Self {
        Self {
            temperature: snapshot.temperature_rounded(),
            feels_like: snapshot.feels_like_rounded(),
            humidity: snapshot.humidity,
            wind_speed: snapshot.wind_speed.to_string(),
            location: snapshot.location,
            description: snapshot.description,
            icon_url,
        }
    }
}

/// Error fragment offering only a logout action.
#[derive(Template)]
#[template(path = "weather_error.html")]
pub struct WeatherErrorTemplate {
    pub message: &'static str,
}

/// Renders the weather page shell.
///
/// # Endpoint
///
/// `GET /weather`
///
/// # Authentication
///
/// Checks the session itself in addition to
/// [`crate::web::middleware::web_auth`]; without a token it redirects to `/`
/// and nothing is fetched.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the page fails to render.
pub async fn weather_page_handler(session: Session) -> Result<Response, AppError> {
    if !session.is_authenticated() {
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    }

    let page = WeatherPageTemplate {
        today: format_long_date(&Local::now()),
        snapshot_path: SNAPSHOT_PATH,
    };

    Ok(render(&page)?.into_response())
}

/// Fetches the current weather and renders the card fragment.
///
/// # Endpoint
///
/// `GET /weather/snapshot`
///
/// # Responses
///
/// - **303 See Other** to `/` without a session (no upstream request)
/// - **200 OK** with the weather card
/// - **502 Bad Gateway** with an error fragment when the upstream rejects
///   the request or cannot be reached
///
/// Exactly one upstream request is made per call. There is no retry and no
/// timeout.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the fragment fails to render.
pub async fn weather_snapshot_handler(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if !session.is_authenticated() {
        return Ok(Redirect::to(LOGIN_PATH).into_response());
    }

    match state.weather_service.current().await {
        Ok(snapshot) => {
            let icon_url = state.weather_service.icon_url(&snapshot);
            Ok(render(&WeatherCardTemplate::new(snapshot, icon_url))?.into_response())
        }
        Err(e) => {
            let fragment = WeatherErrorTemplate {
                message: e.user_message(),
            };
            Ok((StatusCode::BAD_GATEWAY, render(&fragment)?).into_response())
        }
    }
}
