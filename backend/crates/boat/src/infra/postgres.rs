//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, SessionId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::profile::Profile;
use crate::domain::repository::{ProfileRepository, SessionRepository};
use crate::domain::session::Session;
use crate::error::BoatResult;

// ============================================================================
// Profile Repository
// ============================================================================

#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn find_first(&self) -> BoatResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                profile_id,
                name,
                bio,
                avatar_url,
                created_at,
                updated_at
            FROM profiles
            ORDER BY created_at, profile_id
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    name: String,
    bio: Option<String>,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            id: ProfileId::from_uuid(self.profile_id),
            name: self.name,
            bio: self.bio,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============================================================================
// Session Repository
// ============================================================================

#[derive(Clone)]
pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SessionRepository for PgSessionRepository {
    async fn find_by_id(&self, session_id: SessionId) -> BoatResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                expires_at_ms
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SessionRow::into_session))
    }

    async fn cleanup_expired(&self) -> BoatResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired sessions");

        Ok(deleted)
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Option<Uuid>,
    expires_at_ms: i64,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session::stored(
            SessionId::from_uuid(self.session_id),
            self.user_id,
            self.expires_at_ms,
        )
    }
}
