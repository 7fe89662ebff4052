//! `reqwest`-backed implementations of the upstream provider traits.

mod auth_client;
mod weather_client;

pub use auth_client::HttpAuthProvider;
pub use weather_client::HttpWeatherProvider;
