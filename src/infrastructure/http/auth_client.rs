//! HTTP client for the third-party login endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::domain::entities::{Credentials, SessionToken};
use crate::domain::errors::AuthError;
use crate::domain::providers::AuthProvider;

/// Success body of the login endpoint.
///
/// Some providers name the field `access_token`; both spellings are accepted.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(alias = "access_token")]
    token: String,
}

/// Authentication provider that POSTs credentials as JSON.
pub struct HttpAuthProvider {
    client: Client,
    endpoint: Url,
}

impl HttpAuthProvider {
    /// Creates a provider sharing the given connection pool.
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn authenticate(&self, credentials: &Credentials) -> Result<SessionToken, AuthError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "Auth endpoint responded");

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;

        SessionToken::new(body.token)
            .ok_or_else(|| AuthError::Decode("empty token in response".to_string()))
    }

    fn describe(&self) -> String {
        self.endpoint.host_str().unwrap_or("unknown").to_string()
    }
}
