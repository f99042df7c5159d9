//! Profile Service
//!
//! Shared, process-lifetime access to stored profiles.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::profile::Profile;
use crate::domain::repository::ProfileRepository;
use crate::error::{BoatError, BoatResult};
use crate::infra::postgres::PgProfileRepository;

pub struct ProfileService<R>
where
    R: ProfileRepository,
{
    profile_repo: Arc<R>,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: Arc<R>) -> Self {
        Self { profile_repo }
    }

    /// First stored profile. An empty table is an error.
    pub async fn get_first(&self) -> BoatResult<Profile> {
        self.profile_repo
            .find_first()
            .await?
            .ok_or(BoatError::ProfileNotFound)
    }
}

impl ProfileService<PgProfileRepository> {
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgProfileRepository::new(pool)))
    }
}
