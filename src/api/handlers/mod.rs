//! JSON handlers outside the page flow.

mod fallback;
mod health;

pub use fallback::not_found_handler;
pub use health::health_handler;
