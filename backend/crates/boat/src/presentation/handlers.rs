//! HTTP Handlers

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use std::sync::Arc;

use crate::application::config::BoatConfig;
use crate::application::view::{TITLE_KEY, ViewData};
use crate::domain::repository::ProfileRepository;
use crate::error::{BoatError, BoatResult};
use crate::presentation::context::BoatContext;

pub const MANIFEST_CONTENT_TYPE: &str = "application/manifest+json";

/// GET /manifest.webmanifest
///
/// Read from disk on every request.
pub async fn manifest(State(config): State<Arc<BoatConfig>>) -> BoatResult<Response> {
    let manifest = tokio::fs::read(&config.manifest_path).await.map_err(|e| {
        tracing::error!(
            error = %e,
            path = %config.manifest_path.display(),
            "Failed to read manifest"
        );
        BoatError::ManifestUnavailable
    })?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, MANIFEST_CONTENT_TYPE)],
        manifest,
    )
        .into_response())
}

/// GET /
pub async fn index<R>(ctx: BoatContext<R>) -> BoatResult<Response>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    ctx.return_view(StatusCode::OK, "index.html", ViewData::new())
        .await
}

/// GET /login
pub async fn login<R>(ctx: BoatContext<R>) -> BoatResult<Response>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    ctx.redirect_if_logged_in("/")?;

    ctx.return_view(StatusCode::OK, "login.html", ViewData::new())
        .await
}

/// GET /settings
pub async fn settings<R>(ctx: BoatContext<R>) -> BoatResult<Response>
where
    R: ProfileRepository + Send + Sync + 'static,
{
    ctx.ensure_logged_in()?;

    let mut data = ViewData::new();
    data.insert(
        TITLE_KEY.to_string(),
        Value::String(format!("Settings | {}", ctx.config().app_name)),
    );

    ctx.return_view(StatusCode::OK, "settings.html", data).await
}
