//! Web layer for the browser-facing pages.
//!
//! Provides the login page, the protected weather page and logout.
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie-presence route guard
//! - [`routes`] - Route configuration and protected path matching
//! - [`session`] - Cookie-backed session slot

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod session;
