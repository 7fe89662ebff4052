//! Authentication service for login form submissions.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::{Credentials, SessionToken};
use crate::domain::errors::AuthError;
use crate::domain::providers::AuthProvider;

/// Service that turns submitted credentials into a session token.
///
/// The token is trusted as-is: no signature, expiry or shape checks are made
/// here or anywhere else.
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// Submits credentials to the provider exactly once.
    ///
    /// # Errors
    ///
    /// Propagates the provider's [`AuthError`] unchanged; nothing is retried.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        info!(email = %credentials.email, "Login attempt");

        match self.provider.authenticate(credentials).await {
            Ok(token) => {
                info!(email = %credentials.email, "Login succeeded");
                Ok(token)
            }
            Err(e) => {
                warn!(email = %credentials.email, error = %e, "Login failed");
                Err(e)
            }
        }
    }

    /// Description of the configured upstream.
    pub fn upstream(&self) -> String {
        self.provider.describe()
    }
}
