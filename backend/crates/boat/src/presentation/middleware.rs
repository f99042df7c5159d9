//! Context Middleware
//!
//! Resolves the session for every request and attaches a [`BoatContext`].

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::config::BoatConfig;
use crate::application::profile_service::ProfileService;
use crate::application::session_provider::SessionProvider;
use crate::application::view::ViewEngine;
use crate::domain::repository::ProfileRepository;
use crate::domain::session::Session;
use crate::error::BoatError;
use crate::presentation::context::BoatContext;

/// Middleware state, built once at startup
pub struct ContextDecorator<P, R>
where
    P: SessionProvider + Send + Sync + 'static,
    R: ProfileRepository + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub profiles: Arc<ProfileService<R>>,
    pub views: Arc<ViewEngine>,
    pub config: Arc<BoatConfig>,
}

impl<P, R> Clone for ContextDecorator<P, R>
where
    P: SessionProvider + Send + Sync + 'static,
    R: ProfileRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
            profiles: self.profiles.clone(),
            views: self.views.clone(),
            config: self.config.clone(),
        }
    }
}

impl<P, R> ContextDecorator<P, R>
where
    P: SessionProvider + Send + Sync + 'static,
    R: ProfileRepository + Send + Sync + 'static,
{
    pub fn new(
        provider: Arc<P>,
        profiles: Arc<ProfileService<R>>,
        views: Arc<ViewEngine>,
        config: Arc<BoatConfig>,
    ) -> Self {
        Self {
            provider,
            profiles,
            views,
            config,
        }
    }

    fn context(&self, session: Session) -> BoatContext<R> {
        BoatContext::new(
            session,
            self.profiles.clone(),
            self.views.clone(),
            self.config.clone(),
        )
    }
}

/// Resolve the session and run `next` with the context attached.
///
/// A provider error is returned as is and `next` never runs.
pub async fn decorate<P, R>(
    State(decorator): State<ContextDecorator<P, R>>,
    mut req: Request,
    next: Next,
) -> Result<Response, BoatError>
where
    P: SessionProvider + Send + Sync + 'static,
    R: ProfileRepository + Send + Sync + 'static,
{
    let session = decorator
        .provider
        .get_session(&decorator.config.session_name, req.headers())
        .await?;

    tracing::debug!(logged_in = session.logged_in(), "Session resolved");

    req.extensions_mut().insert(decorator.context(session));

    Ok(next.run(req).await)
}
