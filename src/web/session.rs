//! Cookie-backed session slot.
//!
//! The session is a single cookie holding the opaque token returned at login.
//! Handlers receive it as a [`Session`] extractor and hand it back as a
//! response part after [`Session::write`] or [`Session::clear`], so no
//! handler touches the cookie header directly.
//!
//! # Cookie Format
//!
//! ```text
//! Set-Cookie: authToken=<token>; HttpOnly; SameSite=Lax; Path=/; Expires=<far future>
//! ```

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, request::Parts},
    response::{IntoResponseParts, ResponseParts},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::convert::Infallible;

use crate::domain::entities::SessionToken;
use crate::state::AppState;

/// Name and attributes of the session cookie.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub cookie_name: String,
    pub secure: bool,
}

impl SessionSettings {
    pub fn new(cookie_name: impl Into<String>, secure: bool) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            secure,
        }
    }
}

/// The session slot for one request.
///
/// Holds at most one token. Presence of a non-empty token is treated as an
/// authenticated session; the value itself is never validated.
#[derive(Debug)]
pub struct Session {
    jar: CookieJar,
    settings: SessionSettings,
}

impl Session {
    /// Reads the session from request headers.
    pub fn from_headers(headers: &HeaderMap, settings: SessionSettings) -> Self {
        Self {
            jar: CookieJar::from_headers(headers),
            settings,
        }
    }

    /// Returns the stored token, or `None` when the slot is empty.
    pub fn read(&self) -> Option<&str> {
        self.jar
            .get(&self.settings.cookie_name)
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Stores `token`, replacing whatever the slot held.
    ///
    /// The cookie is persistent so the session survives browser restarts.
    #[must_use]
    pub fn write(self, token: &SessionToken) -> Self {
        let mut cookie = Cookie::build((self.settings.cookie_name.clone(), token.as_str().to_owned()))
            .path("/")
            .http_only(true)
            .secure(self.settings.secure)
            .same_site(SameSite::Lax)
            .build();
        cookie.make_permanent();

        Self {
            jar: self.jar.add(cookie),
            settings: self.settings,
        }
    }

    /// Empties the slot.
    ///
    /// Always emits a removal cookie, so clearing an empty session is harmless.
    #[must_use]
    pub fn clear(self) -> Self {
        let mut cookie = Cookie::build((self.settings.cookie_name.clone(), ""))
            .path("/")
            .build();
        cookie.make_removal();

        Self {
            jar: self.jar.add(cookie),
            settings: self.settings,
        }
    }
}

impl<S> FromRequestParts<S> for Session
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(Self::from_headers(&parts.headers, app_state.session))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}
