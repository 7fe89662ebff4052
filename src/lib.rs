//! # Weather Portal
//!
//! A login-gated weather page built with Axum. Users sign in against a
//! third-party authentication API; the returned token is kept in a cookie and
//! its presence unlocks a page showing the current weather for one
//! configured city.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, upstream provider traits and errors
//! - **Application Layer** ([`application`]) - Login and weather services
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for the upstreams
//! - **API Layer** ([`api`]) - Health check, error bodies and shared middleware
//! - **Web Layer** ([`web`]) - Login and weather pages, session cookie, route guard
//!
//! ## Session Model
//!
//! The session is one cookie. Its presence is the only thing checked: the
//! token is never validated, refreshed or expired. Access to `/weather` is
//! checked twice, once by router middleware and once by the page handlers.
//!
//! ## Quick Start
//!
//! ```bash
//! export WEATHER_API_KEY="your-openweathermap-key"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, WeatherService};
    pub use crate::domain::entities::{
        Credentials, SessionToken, WeatherQuery, WeatherReport, WeatherSnapshot,
    };
    pub use crate::domain::errors::{AuthError, WeatherError};
    pub use crate::domain::providers::{AuthProvider, WeatherProvider};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::web::session::{Session, SessionSettings};
}
