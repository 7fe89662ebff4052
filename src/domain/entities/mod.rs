//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Credentials`] - Email/password pair submitted at login
//! - [`SessionToken`] - Opaque token held in the session slot
//! - [`WeatherReport`] - Raw upstream weather payload
//! - [`WeatherSnapshot`] - Fields displayed on the weather page

pub mod credentials;
pub mod weather;

pub use credentials::{Credentials, SessionToken};
pub use weather::{WeatherQuery, WeatherReport, WeatherSnapshot, round_half_up};
