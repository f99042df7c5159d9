//! Boat Router

use axum::{Router, middleware, routing::get};
use sqlx::PgPool;
use std::sync::Arc;

use crate::application::config::BoatConfig;
use crate::application::profile_service::ProfileService;
use crate::application::session_provider::{CookieSessionProvider, SessionProvider};
use crate::application::view::ViewEngine;
use crate::domain::repository::ProfileRepository;
use crate::infra::postgres::{PgProfileRepository, PgSessionRepository};
use crate::presentation::handlers;
use crate::presentation::middleware::{ContextDecorator, decorate};

/// Create the site router backed by PostgreSQL
pub fn boat_router(pool: PgPool, views: ViewEngine, config: BoatConfig) -> Router {
    let provider = CookieSessionProvider::new(
        Arc::new(PgSessionRepository::new(pool.clone())),
        config.session_secret,
    );
    let profiles = ProfileService::from_pool(pool);

    boat_router_generic::<_, PgProfileRepository>(provider, profiles, views, config)
}

/// Create the site router for any session provider and profile repository
pub fn boat_router_generic<P, R>(
    provider: P,
    profiles: ProfileService<R>,
    views: ViewEngine,
    config: BoatConfig,
) -> Router
where
    P: SessionProvider + Send + Sync + 'static,
    R: ProfileRepository + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let decorator = ContextDecorator::new(
        Arc::new(provider),
        Arc::new(profiles),
        Arc::new(views),
        config.clone(),
    );

    Router::new()
        .route("/", get(handlers::index::<R>))
        .route("/login", get(handlers::login::<R>))
        .route("/settings", get(handlers::settings::<R>))
        .route("/manifest.webmanifest", get(handlers::manifest))
        .layer(middleware::from_fn_with_state(decorator, decorate::<P, R>))
        .with_state(config)
}
