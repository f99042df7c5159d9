//! Request Context
//!
//! [`BoatContext`] is attached to every request by the context middleware
//! and extracted by handlers. It sits next to axum's own extractors, so a
//! handler still has the full request API alongside the helpers here.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::BoatConfig;
use crate::application::profile_service::ProfileService;
use crate::application::view::{PROFILE_KEY, ViewData, ViewDefaults, ViewEngine, with_defaults};
use crate::domain::repository::ProfileRepository;
use crate::domain::session::Session;
use crate::error::{BoatError, BoatResult};

/// Per-request context: the resolved session plus shared services
pub struct BoatContext<R>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    session: Arc<Session>,
    profiles: Arc<ProfileService<R>>,
    views: Arc<ViewEngine>,
    config: Arc<BoatConfig>,
}

impl<R> Clone for BoatContext<R>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            profiles: self.profiles.clone(),
            views: self.views.clone(),
            config: self.config.clone(),
        }
    }
}

impl<R> BoatContext<R>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    pub fn new(
        session: Session,
        profiles: Arc<ProfileService<R>>,
        views: Arc<ViewEngine>,
        config: Arc<BoatConfig>,
    ) -> Self {
        Self {
            session: Arc::new(session),
            profiles,
            views,
            config,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &BoatConfig {
        &self.config
    }

    pub fn logged_in(&self) -> bool {
        self.session.logged_in()
    }

    /// Guard for protected handlers: `ctx.ensure_logged_in()?;`
    pub fn ensure_logged_in(&self) -> BoatResult<()> {
        if !self.logged_in() {
            return Err(BoatError::Unauthorized);
        }

        Ok(())
    }

    /// Stop the handler with a `303 See Other` to `path` when logged in.
    ///
    /// The redirect travels as `Err(BoatError::SeeOther)`, so `?` ends the
    /// handler. Logged-out requests get `Ok(())` and carry on.
    pub fn redirect_if_logged_in(&self, path: &str) -> BoatResult<()> {
        if self.logged_in() {
            return Err(BoatError::SeeOther(path.to_string()));
        }

        Ok(())
    }

    /// Render `view` with status `code`.
    ///
    /// `title`, `loggedIn` and `profile` are filled in when `data` lacks
    /// them. The profile is only fetched when needed; if that fetch fails
    /// nothing is rendered and the result is `ProfileUnavailable`.
    pub async fn return_view(
        &self,
        code: StatusCode,
        view: &str,
        data: ViewData,
    ) -> BoatResult<Response> {
        let profile = if data.contains_key(PROFILE_KEY) {
            None
        } else {
            Some(self.profile_value().await?)
        };

        let data = with_defaults(
            data,
            ViewDefaults {
                title: self.config.app_name.clone(),
                logged_in: self.logged_in(),
                profile,
            },
        );

        let body = self.views.render(view, &data)?;

        Ok((code, Html(body)).into_response())
    }

    async fn profile_value(&self) -> BoatResult<serde_json::Value> {
        let profile = self.profiles.get_first().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load profile for view");
            BoatError::ProfileUnavailable
        })?;

        serde_json::to_value(profile).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialize profile for view");
            BoatError::ProfileUnavailable
        })
    }
}

impl<S, R> FromRequestParts<S> for BoatContext<R>
where
    S: Send + Sync,
    R: ProfileRepository + Send + Sync + 'static,
{
    type Rejection = BoatError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<BoatContext<R>>()
            .cloned()
            .ok_or(BoatError::ContextMissing)
    }
}
