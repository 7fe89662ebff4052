//! Provider trait for the third-party authentication endpoint.

use async_trait::async_trait;

use crate::domain::entities::{Credentials, SessionToken};
use crate::domain::errors::AuthError;

/// Exchanges credentials for an opaque session token.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpAuthProvider`] - JSON over HTTP via `reqwest`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Submits the credentials once.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] for any non-2xx status
    /// - [`AuthError::Transport`] if the request could not complete
    /// - [`AuthError::Decode`] if a 2xx body carries no usable token
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError>;

    /// Human-readable description of the upstream, used by the health check.
    fn describe(&self) -> String;
}
