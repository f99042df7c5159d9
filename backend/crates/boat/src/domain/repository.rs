//! Repository Traits
//!
//! Read paths into storage. Implementations live in the infrastructure layer.

use crate::domain::profile::Profile;
use crate::domain::session::Session;
use crate::error::BoatResult;
use kernel::id::SessionId;

/// Profile repository trait
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Oldest stored profile, if any
    async fn find_first(&self) -> BoatResult<Option<Profile>>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Find a stored session by ID
    async fn find_by_id(&self, session_id: SessionId) -> BoatResult<Option<Session>>;

    /// Delete expired sessions, returning how many were removed
    async fn cleanup_expired(&self) -> BoatResult<u64>;
}
