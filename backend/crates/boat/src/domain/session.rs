//! Session Entity
//!
//! Per-request view of a browser session. Sessions are created elsewhere
//! (sign-in is not part of this crate); here they are only read.

use chrono::Utc;
use kernel::id::SessionId;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// `None` for a visitor without a stored session
    pub session_id: Option<SessionId>,
    /// Set once the session has been authenticated
    pub user_id: Option<Uuid>,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: Option<i64>,
}

impl Session {
    /// Logged-out session for visitors without a valid cookie
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session backed by a stored row
    pub fn stored(session_id: SessionId, user_id: Option<Uuid>, expires_at_ms: i64) -> Self {
        Self {
            session_id: Some(session_id),
            user_id,
            expires_at_ms: Some(expires_at_ms),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at_ms
            .is_some_and(|expires_at_ms| Utc::now().timestamp_millis() > expires_at_ms)
    }

    /// True when the session belongs to a user and has not expired
    pub fn logged_in(&self) -> bool {
        self.user_id.is_some() && !self.is_expired()
    }
}
