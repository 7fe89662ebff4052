//! Domain layer containing entities, upstream contracts and their errors.
//!
//! # Architecture
//!
//! - [`entities`] - Credentials, session token and weather data
//! - [`providers`] - Traits for the authentication and weather upstreams
//! - [`errors`] - Typed upstream failures and their user-facing messages
//!
//! The domain layer has no dependency on HTTP clients or the web layer.
//! Orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod errors;
pub mod providers;
