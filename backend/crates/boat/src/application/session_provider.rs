//! Session Provider
//!
//! Resolves the session for an incoming request.

use axum::http::HeaderMap;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::SessionId;

use crate::domain::repository::SessionRepository;
use crate::domain::session::Session;
use crate::error::{BoatError, BoatResult};

/// Resolves a [`Session`] from request headers.
///
/// `name` is the session (cookie) name. Errors are handed back to the
/// client unchanged by the context middleware.
#[trait_variant::make(SessionProvider: Send)]
pub trait LocalSessionProvider {
    async fn get_session(&self, name: &str, headers: &HeaderMap) -> BoatResult<Session>;
}

/// Cookie-backed provider.
///
/// The cookie holds a signed session ID (`<uuid>.<signature>`). Visitors
/// without a cookie, with an unknown ID or with an expired session get an
/// anonymous session. A cookie whose signature does not verify is an error.
pub struct CookieSessionProvider<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    session_repo: Arc<R>,
    session_secret: [u8; 32],
}

impl<R> CookieSessionProvider<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    pub fn new(session_repo: Arc<R>, session_secret: [u8; 32]) -> Self {
        Self {
            session_repo,
            session_secret,
        }
    }

    /// Cookie value for a stored session
    pub fn session_token(&self, session_id: SessionId) -> String {
        platform::crypto::sign_token(&self.session_secret, &session_id.to_string())
    }

    fn parse_session_token(&self, token: &str) -> Option<SessionId> {
        let payload = platform::crypto::verify_token(&self.session_secret, token)?;
        payload.parse::<Uuid>().ok().map(SessionId::from_uuid)
    }
}

impl<R> SessionProvider for CookieSessionProvider<R>
where
    R: SessionRepository + Send + Sync + 'static,
{
    async fn get_session(&self, name: &str, headers: &HeaderMap) -> BoatResult<Session> {
        let Some(token) = platform::cookie::extract_cookie(headers, name) else {
            tracing::debug!(cookie = %name, "No session cookie");
            return Ok(Session::anonymous());
        };

        let session_id = self
            .parse_session_token(&token)
            .ok_or_else(|| BoatError::SessionInvalid(name.to_string()))?;

        match self.session_repo.find_by_id(session_id).await? {
            Some(session) if !session.is_expired() => Ok(session),
            Some(_) => {
                tracing::debug!(session_id = %session_id, "Session expired");
                Ok(Session::anonymous())
            }
            None => {
                tracing::debug!(session_id = %session_id, "Session not found");
                Ok(Session::anonymous())
            }
        }
    }
}
